//! Analysis configuration: tier depths and cache limits, loadable from TOML.
//!
//! ```toml
//! [tiers]
//! free = 2
//! basic = 5
//! pro = 10
//!
//! [cache]
//! capacity = 10000
//! ttl_secs = 86400
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};

/// Named search-depth preset, shallowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Free,
    Basic,
    Pro,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Free, Tier::Basic, Tier::Pro];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Basic => "basic",
            Tier::Pro => "pro",
        }
    }

    /// Parse a tier name; anything unrecognized falls back to the
    /// shallowest tier.
    pub fn from_name(s: &str) -> Tier {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "medium" => Tier::Basic,
            "pro" | "deep" => Tier::Pro,
            // "free", "shallow" and anything unknown
            _ => Tier::Free,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierDepths {
    pub free: u8,
    pub basic: u8,
    pub pro: u8,
}

impl Default for TierDepths {
    fn default() -> Self {
        Self {
            free: 2,
            basic: 5,
            pro: 10,
        }
    }
}

impl TierDepths {
    pub fn depth(&self, tier: Tier) -> u8 {
        match tier {
            Tier::Free => self.free,
            Tier::Basic => self.basic,
            Tier::Pro => self.pro,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: usize,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl_secs: DEFAULT_TTL.as_secs(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub tiers: TierDepths,
    pub cache: CacheConfig,
}

impl AnalysisConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.capacity == 0 {
            return Err(ConfigError::Invalid("cache.capacity must be positive".into()));
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Invalid("cache.ttl_secs must be positive".into()));
        }
        let t = &self.tiers;
        if !(t.free < t.basic && t.basic < t.pro) {
            return Err(ConfigError::Invalid(format!(
                "tier depths must increase: free={} basic={} pro={}",
                t.free, t.basic, t.pro
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
