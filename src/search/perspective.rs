//! Which side a search node optimizes for.
//!
//! A single recursive routine serves both players. The perspective supplies
//! the comparisons that differ between them:
//!
//! | | `Max` | `Min` |
//! |---|---|---|
//! | starting best | −∞ | +∞ |
//! | improvement | `value > best` | `value < best` |
//! | fail-hard cutoff | `best >= upper` | `best <= lower` |
//! | window update | raise `lower` | lower `upper` |

use serde::{Deserialize, Serialize};

/// The side to move at a search node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    /// The deciding player, seeking the highest value.
    Max,
    /// The adversary, seeking the lowest value.
    Min,
}

impl Perspective {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Perspective::Max => Perspective::Min,
            Perspective::Min => Perspective::Max,
        }
    }

    /// Worst possible value for this side, the starting point of a node's best.
    #[must_use]
    pub const fn worst(self) -> f64 {
        match self {
            Perspective::Max => f64::NEG_INFINITY,
            Perspective::Min => f64::INFINITY,
        }
    }

    /// Check if `value` is strictly better than `best` for this side.
    #[must_use]
    pub fn improves(self, value: f64, best: f64) -> bool {
        match self {
            Perspective::Max => value > best,
            Perspective::Min => value < best,
        }
    }
}

/// An alpha-beta window: `lower` is the maximizer's guaranteed value,
/// `upper` the minimizer's.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Best value the maximizer can already force.
    pub lower: f64,
    /// Best value the minimizer can already force.
    pub upper: f64,
}

impl Window {
    /// The unbounded window `[−∞, +∞]`.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Create a window from explicit bounds.
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Check if `best` for `side` falls outside the window, so the rest of
    /// the node's actions cannot matter to its parent.
    #[must_use]
    pub fn cuts_off(&self, side: Perspective, best: f64) -> bool {
        match side {
            Perspective::Max => best >= self.upper,
            Perspective::Min => best <= self.lower,
        }
    }

    /// Tighten the bound owned by `side` with its best value so far.
    pub fn tighten(&mut self, side: Perspective, best: f64) {
        match side {
            Perspective::Max => self.lower = self.lower.max(best),
            Perspective::Min => self.upper = self.upper.min(best),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Perspective::Max.opponent(), Perspective::Min);
        assert_eq!(Perspective::Min.opponent(), Perspective::Max);
    }

    #[test]
    fn test_improves_is_strict() {
        assert!(Perspective::Max.improves(2.0, 1.0));
        assert!(!Perspective::Max.improves(1.0, 1.0));
        assert!(Perspective::Min.improves(1.0, 2.0));
        assert!(!Perspective::Min.improves(2.0, 2.0));
        assert!(Perspective::Max.improves(-1e9, Perspective::Max.worst()));
        assert!(Perspective::Min.improves(1e9, Perspective::Min.worst()));
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let window = Window::new(1.0, 5.0);
        assert!(window.cuts_off(Perspective::Max, 5.0));
        assert!(!window.cuts_off(Perspective::Max, 4.9));
        assert!(window.cuts_off(Perspective::Min, 1.0));
        assert!(!window.cuts_off(Perspective::Min, 1.1));
    }

    #[test]
    fn test_full_window_never_cuts_finite_values() {
        let window = Window::full();
        assert!(!window.cuts_off(Perspective::Max, 1e300));
        assert!(!window.cuts_off(Perspective::Min, -1e300));
    }

    #[test]
    fn test_tighten_only_narrows() {
        let mut window = Window::new(1.0, 5.0);
        window.tighten(Perspective::Max, 0.0);
        assert_eq!(window.lower, 1.0);
        window.tighten(Perspective::Max, 3.0);
        assert_eq!(window.lower, 3.0);
        window.tighten(Perspective::Min, 6.0);
        assert_eq!(window.upper, 5.0);
        window.tighten(Perspective::Min, 4.0);
        assert_eq!(window.upper, 4.0);
    }
}
