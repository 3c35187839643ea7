//! The "analyze this position" entry point: tier to depth, cache lookup,
//! search on a miss, result assembly.

use std::marker::PhantomData;
use std::time::Instant;

use domino_core::{Engine, GameState, Seat};
use minimax_engine::MinimaxEngine;
use tracing::{debug, warn};

use crate::cache::PositionCache;
use crate::config::{AnalysisConfig, Tier};
use crate::result::{build_suggestions, win_probability, AnalysisResult};

/// Cached, tiered analysis over engine `E`.
///
/// A fresh engine is built for every call, so the cache is the only state
/// shared between concurrent analyses.
#[derive(Debug)]
pub struct Analyzer<E = MinimaxEngine> {
    config: AnalysisConfig,
    cache: PositionCache,
    _engine: PhantomData<fn() -> E>,
}

impl Default for Analyzer<MinimaxEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer<MinimaxEngine> {
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }
}

impl<E: Engine + Default> Analyzer<E> {
    pub fn with_config(config: AnalysisConfig) -> Self {
        let cache = PositionCache::from_config(&config.cache);
        Self {
            config,
            cache,
            _engine: PhantomData,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn cache(&self) -> &PositionCache {
        &self.cache
    }

    pub fn depth_for(&self, tier: Tier) -> u8 {
        self.config.tiers.depth(tier)
    }

    /// Like [`Analyzer::analyze`], with the tier given by name.
    pub fn analyze_named(&self, state: &GameState, tier: &str) -> AnalysisResult {
        self.analyze(state, Tier::from_name(tier))
    }

    /// Analyze `state` for the player holding its hand. Never fails: a
    /// search error yields [`AnalysisResult::unavailable`], which is not
    /// cached.
    pub fn analyze(&self, state: &GameState, tier: Tier) -> AnalysisResult {
        let depth = self.depth_for(tier);
        let key = PositionCache::key(&state.board, Seat::Player, state.variant, depth);

        if let Some(mut cached) = self.cache.get(key) {
            debug!(%key, depth, "analysis served from cache");
            cached.from_cache = true;
            return cached;
        }

        let started = Instant::now();
        let mut engine = E::default();
        let outcome = match engine.search(state, depth) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(engine = engine.name(), %err, depth, "analysis failed");
                return AnalysisResult::unavailable();
            }
        };

        let result = AnalysisResult {
            best_move: outcome.best_move,
            evaluation: outcome.score,
            win_probability: win_probability(outcome.score),
            suggestions: build_suggestions(state, &outcome),
            depth: outcome.depth,
            elapsed_ms: started.elapsed().as_millis() as u64,
            from_cache: false,
        };
        debug!(
            %key,
            depth,
            nodes = outcome.nodes,
            score = outcome.score,
            elapsed_ms = result.elapsed_ms,
            "analysis computed"
        );

        self.cache.put(key, result.clone());
        result
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod analyzer_tests;
