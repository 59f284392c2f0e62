//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Minimax search configuration.
///
/// The search horizon is not configured here: it belongs to the game
/// (`Game::should_cut_off`), see `rules::DepthCutoff`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Memoize exact node values by state (default: true).
    /// When disabled the search is plain alpha-beta.
    pub transposition_table: bool,

    /// Entries reserved up front in each decision's cache.
    /// Avoids rehashing during the first plies of a search.
    pub cache_capacity: usize,

    /// Emit a `debug` summary after every decision.
    pub log_decisions: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            transposition_table: true,
            cache_capacity: 4096,
            log_decisions: true,
        }
    }
}

impl SearchConfig {
    /// Enable or disable the transposition table.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.transposition_table = enabled;
        self
    }

    /// Set the initial cache reservation.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Enable or disable the per-decision log line.
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_decisions = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert!(config.transposition_table);
        assert_eq!(config.cache_capacity, 4096);
        assert!(config.log_decisions);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_transposition_table(false)
            .with_cache_capacity(16)
            .with_logging(false);

        assert!(!config.transposition_table);
        assert_eq!(config.cache_capacity, 16);
        assert!(!config.log_decisions);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_cache_capacity(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.cache_capacity, 99);
        assert!(deserialized.transposition_table);
    }
}
