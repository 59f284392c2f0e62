//! Depth-based search horizon.

use serde::{Deserialize, Serialize};

/// Cut the search off once it is `max_depth` plies below the root.
///
/// The depth a caller picks here is the engine's "intelligence level":
/// deeper horizons see further but expand exponentially more nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthCutoff {
    /// Plies below the root at which evaluation replaces search.
    pub max_depth: u32,
}

impl DepthCutoff {
    /// Create a cutoff at the given depth.
    #[must_use]
    pub const fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    /// Never cut off. Only safe for games where every line terminates.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_depth: u32::MAX }
    }

    /// Check whether `depth` is at or beyond the horizon.
    #[must_use]
    pub fn should_cut_off(&self, depth: u32) -> bool {
        depth >= self.max_depth
    }

    /// Check if this policy ever cuts off.
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        self.max_depth == u32::MAX
    }
}

impl Default for DepthCutoff {
    fn default() -> Self {
        Self::new(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_at_depth() {
        let cutoff = DepthCutoff::new(2);
        assert!(!cutoff.should_cut_off(0));
        assert!(!cutoff.should_cut_off(1));
        assert!(cutoff.should_cut_off(2));
        assert!(cutoff.should_cut_off(3));
    }

    #[test]
    fn test_unlimited() {
        let cutoff = DepthCutoff::unlimited();
        assert!(cutoff.is_unlimited());
        assert!(!cutoff.should_cut_off(10_000));
    }

    #[test]
    fn test_serialization() {
        let cutoff = DepthCutoff::new(6);
        let json = serde_json::to_string(&cutoff).unwrap();
        let deserialized: DepthCutoff = serde_json::from_str(&json).unwrap();
        assert_eq!(cutoff, deserialized);
    }
}
