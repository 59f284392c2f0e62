//! The `Game` trait: everything the search needs to know about a game.

use std::hash::Hash;

/// Rules of a deterministic, perfect-information, two-player zero-sum game.
///
/// The search engine calls these methods synchronously and trusts their
/// output: identical arguments must always produce identical results, since
/// computed values are memoized per state.
///
/// ## Implementation Notes
///
/// - `actions`: Order defines search order and tie-breaking at the root.
///   Return an empty vec for terminal states.
/// - `utility`: Only called on terminal states. Positive values favor the
///   maximizing player.
/// - `should_cut_off`: Bounds recursion depth. The engine imposes no limit
///   of its own, so a policy that never cuts off must only be used with
///   games whose every line of play terminates.
/// - Faults (panics) inside these methods propagate through the search
///   unchanged.
pub trait Game {
    /// A position. Used as the memoization key, so equality and hashing
    /// must be by content.
    type State: Clone + Eq + Hash;

    /// A move, meaningful only in the context of this game.
    type Action: Clone;

    /// Legal actions from `state`, in search order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by playing `action` in `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Check if the game is over in `state`.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Final value of a terminal state.
    fn utility(&self, state: &Self::State) -> f64;

    /// Whether the search should stop descending at `depth` plies below the
    /// decision root.
    fn should_cut_off(&self, depth: u32) -> bool;

    /// Heuristic value of a non-terminal state at the search horizon.
    fn evaluate(&self, state: &Self::State) -> f64;
}
