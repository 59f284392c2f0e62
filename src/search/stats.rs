//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes expanded (children enumerated), including the root.
    /// Cache hits, terminal and cutoff leaves are not expansions.
    pub nodes_expanded: u64,

    /// Lookups answered by the transposition table.
    pub cache_hits: u64,

    /// Exact values written to the transposition table.
    pub cache_stores: u64,

    /// Nodes abandoned early by an alpha-beta cutoff.
    pub prunes: u64,

    /// Terminal states scored with `Game::utility`.
    pub terminal_hits: u64,

    /// Horizon states scored with `Game::evaluate`.
    pub heuristic_evals: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Total time spent deciding (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate expanded nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of non-terminal, non-horizon visits served from the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.nodes_expanded;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }

    pub(crate) fn record_depth(&mut self, depth: u32) {
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }
}
