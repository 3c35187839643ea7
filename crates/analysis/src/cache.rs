//! Bounded, time-limited memo of analysis results keyed by position.
//!
//! Eviction is by insertion order (oldest first), not recency of use.
//! Readers share a read lock; writers take the write lock briefly, so
//! concurrent writes to one key are last-write-wins.

use std::collections::{HashMap, VecDeque};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use domino_core::{position_key, Board, PositionKey, Seat, Variant};
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::result::AnalysisResult;

pub const DEFAULT_CAPACITY: usize = 10_000;
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: PositionKey,
    pub depth: u8,
    pub result: AnalysisResult,
    pub created_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() < ttl
    }
}

#[derive(Debug, Default)]
struct Table {
    entries: HashMap<PositionKey, CacheEntry>,
    /// Keys in insertion order, oldest at the front
    order: VecDeque<PositionKey>,
}

#[derive(Debug)]
pub struct PositionCache {
    table: RwLock<Table>,
    capacity: usize,
    ttl: Duration,
}

impl Default for PositionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionCache {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// A capacity of zero is treated as one.
    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            capacity: capacity.max(1),
            ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_limits(config.capacity, config.ttl())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn key(board: &Board, mover: Seat, variant: Variant, depth: u8) -> PositionKey {
        position_key(board, mover, variant, depth)
    }

    /// Fresh result for `key`, if any. Stale entries read as a miss and
    /// stay in the table until evicted or purged.
    pub fn get(&self, key: PositionKey) -> Option<AnalysisResult> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        match table.entries.get(&key) {
            Some(entry) if entry.is_fresh(self.ttl) => {
                trace!(%key, "cache hit");
                Some(entry.result.clone())
            }
            Some(_) => {
                trace!(%key, "cache entry expired");
                None
            }
            None => None,
        }
    }

    pub fn put(&self, key: PositionKey, result: AnalysisResult) {
        let entry = CacheEntry {
            key,
            depth: result.depth,
            result,
            created_at: Instant::now(),
        };

        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = table.entries.get_mut(&key) {
            *existing = entry;
            return;
        }

        while table.entries.len() >= self.capacity {
            let Some(oldest) = table.order.pop_front() else {
                break;
            };
            table.entries.remove(&oldest);
            debug!(key = %oldest, "evicted oldest cache entry");
        }

        table.order.push_back(key);
        table.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        table.entries.clear();
        table.order.clear();
    }

    /// Drop every stale entry; returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let ttl = self.ttl;
        let before = table.entries.len();
        table.entries.retain(|_, entry| entry.is_fresh(ttl));
        let Table { entries, order } = &mut *table;
        order.retain(|key| entries.contains_key(key));

        let removed = before - table.entries.len();
        if removed > 0 {
            debug!(removed, "purged expired cache entries");
        }
        removed
    }

    /// Full entry for `key` regardless of age.
    pub fn entry(&self, key: PositionKey) -> Option<CacheEntry> {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .get(&key)
            .cloned()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
