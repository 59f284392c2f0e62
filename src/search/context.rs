//! Per-decision search state: the transposition table and counters.
//!
//! A fresh `SearchContext` is created for every decision and threaded by
//! `&mut` through the recursion. Nothing in it outlives the call, so an
//! engine can serve any number of decisions, including concurrent ones.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Mutable state owned by one in-flight decision.
///
/// ## Cache Contract
///
/// Only values of fully searched nodes are stored. A value returned through
/// a fail-hard cutoff is never memoized. A completed node whose value lands
/// at or beyond a bound of its window is still stored, and a later visit
/// under a wider window reuses it as if it were exact.
///
/// The key is the state alone. A state reached again at a different depth
/// reuses the stored value even if the game's cutoff policy would have
/// treated it differently there.
#[derive(Clone, Debug)]
pub struct SearchContext<S> {
    cache: FxHashMap<S, f64>,
    enabled: bool,
    stats: SearchStats,
}

impl<S: Eq + Hash> SearchContext<S> {
    /// Create an empty context with the transposition table enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&SearchConfig::default())
    }

    /// Create an empty context sized and enabled per `config`.
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        let capacity = if config.transposition_table {
            config.cache_capacity
        } else {
            0
        };
        Self {
            cache: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            enabled: config.transposition_table,
            stats: SearchStats::default(),
        }
    }

    /// Look up a memoized value, counting a hit.
    pub fn lookup(&mut self, state: &S) -> Option<f64> {
        if !self.enabled {
            return None;
        }
        let value = self.cache.get(state).copied();
        if value.is_some() {
            self.stats.cache_hits += 1;
        }
        value
    }

    /// Memoize the value of a fully searched node.
    pub fn store(&mut self, state: S, value: f64) {
        if self.enabled {
            self.cache.insert(state, value);
            self.stats.cache_stores += 1;
        }
    }

    /// Peek at a memoized value without touching the counters.
    #[must_use]
    pub fn cached(&self, state: &S) -> Option<f64> {
        self.cache.get(state).copied()
    }

    /// Number of memoized states.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Count one expanded node.
    pub fn count_expansion(&mut self) {
        self.stats.nodes_expanded += 1;
    }

    /// Nodes expanded so far.
    #[must_use]
    pub fn nodes_expanded(&self) -> u64 {
        self.stats.nodes_expanded
    }

    /// Get the counters collected so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Consume the context, keeping only its counters.
    #[must_use]
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }
}

impl<S: Eq + Hash> Default for SearchContext<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_empty() {
        let ctx: SearchContext<u32> = SearchContext::new();
        assert_eq!(ctx.cache_len(), 0);
        assert_eq!(ctx.nodes_expanded(), 0);
        assert_eq!(ctx.stats(), &SearchStats::default());
    }

    #[test]
    fn test_store_then_lookup_counts_hit() {
        let mut ctx = SearchContext::new();
        assert_eq!(ctx.lookup(&7u32), None);
        assert_eq!(ctx.stats().cache_hits, 0);

        ctx.store(7u32, 2.5);
        assert_eq!(ctx.lookup(&7), Some(2.5));
        assert_eq!(ctx.stats().cache_hits, 1);
        assert_eq!(ctx.stats().cache_stores, 1);
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let config = SearchConfig::default().with_transposition_table(false);
        let mut ctx = SearchContext::from_config(&config);

        ctx.store(1u32, 1.0);
        assert_eq!(ctx.cache_len(), 0);
        assert_eq!(ctx.lookup(&1), None);
        assert_eq!(ctx.stats().cache_stores, 0);
    }

    #[test]
    fn test_count_expansion() {
        let mut ctx: SearchContext<u32> = SearchContext::new();
        ctx.count_expansion();
        ctx.count_expansion();
        assert_eq!(ctx.nodes_expanded(), 2);
        assert_eq!(ctx.into_stats().nodes_expanded, 2);
    }
}
