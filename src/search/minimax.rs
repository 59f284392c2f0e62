//! Depth-limited minimax with fail-hard alpha-beta pruning.
//!
//! The root is handled by `decide`, which enumerates the deciding player's
//! actions and asks the adversary's search for each one. Interior nodes are
//! handled by `search`, one routine for both sides tagged by `Perspective`.

use std::time::Instant;

use crate::rules::Game;

use super::config::SearchConfig;
use super::context::SearchContext;
use super::perspective::{Perspective, Window};
use super::record::DecisionRecord;

/// Minimax decision engine.
///
/// Generic over the game. Holds only the game and configuration: every
/// decision gets its own `SearchContext`, so `decide` takes `&self` and can
/// be called repeatedly or from several threads when `G: Sync`.
pub struct MinimaxSearch<G: Game> {
    /// The game rules.
    game: G,

    /// Search configuration.
    config: SearchConfig,
}

impl<G: Game> MinimaxSearch<G> {
    /// Create a new search engine.
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self { game, config }
    }

    /// Create a search engine with the default configuration.
    pub fn with_defaults(game: G) -> Self {
        Self::new(game, SearchConfig::default())
    }

    /// Choose the best action for the maximizing player in `state`.
    ///
    /// The root loop raises its own lower bound from its best value so far
    /// but never stops early, unlike interior maximizing nodes.
    ///
    /// If `state` has no legal actions the record carries no action, no
    /// state and a value of negative infinity.
    pub fn decide(&self, state: &G::State) -> DecisionRecord<G::State, G::Action> {
        let start = Instant::now();
        let mut ctx = SearchContext::from_config(&self.config);

        let mut best_value = f64::NEG_INFINITY;
        let mut best: Option<(G::Action, G::State)> = None;
        ctx.count_expansion();

        let mut window = Window::full();

        for (index, action) in self.game.actions(state).into_iter().enumerate() {
            let next = self.game.result(state, &action);
            let value = self.search(&mut ctx, &next, window, 1, Perspective::Min);
            log::trace!("root action {:<4} value {}", index, value);

            if value > best_value {
                best_value = value;
                best = Some((action, next));
            }

            window.tighten(Perspective::Max, best_value);
        }

        let elapsed = start.elapsed();
        let mut stats = ctx.into_stats();
        stats.time_us = elapsed.as_micros() as u64;

        if self.config.log_decisions {
            log::debug!(
                "decided value {} after {} nodes ({} cache hits, {} prunes) in {:?}",
                best_value,
                stats.nodes_expanded,
                stats.cache_hits,
                stats.prunes,
                elapsed
            );
        }

        let (action, state) = match best {
            Some((action, state)) => (Some(action), Some(state)),
            None => (None, None),
        };

        DecisionRecord {
            elapsed,
            value: best_value,
            action,
            state,
            stats,
        }
    }

    /// Value of `state` for the maximizing player to move, within
    /// `[lower, upper]`.
    pub fn max_value(
        &self,
        ctx: &mut SearchContext<G::State>,
        state: &G::State,
        lower: f64,
        upper: f64,
        depth: u32,
    ) -> f64 {
        self.search(ctx, state, Window::new(lower, upper), depth, Perspective::Max)
    }

    /// Value of `state` for the minimizing player to move, within
    /// `[lower, upper]`.
    pub fn min_value(
        &self,
        ctx: &mut SearchContext<G::State>,
        state: &G::State,
        lower: f64,
        upper: f64,
        depth: u32,
    ) -> f64 {
        self.search(ctx, state, Window::new(lower, upper), depth, Perspective::Min)
    }

    /// Alpha-beta value of `state` with `side` to move, `depth` plies below
    /// the root.
    ///
    /// Checked in order, first match wins: the transposition table, terminal
    /// utility, then the game's cutoff policy. Only those are leaves; anything
    /// else is expanded and counted.
    ///
    /// A node whose best value leaves the window returns that value at once
    /// (fail-hard) and is not memoized. A node whose actions are all searched
    /// memoizes its value, including a completion that ends at or beyond one
    /// of the bounds it was entered with.
    pub fn search(
        &self,
        ctx: &mut SearchContext<G::State>,
        state: &G::State,
        window: Window,
        depth: u32,
        side: Perspective,
    ) -> f64 {
        ctx.stats_mut().record_depth(depth);

        if let Some(value) = ctx.lookup(state) {
            return value;
        }
        if self.game.is_terminal(state) {
            ctx.stats_mut().terminal_hits += 1;
            return self.game.utility(state);
        }
        if self.game.should_cut_off(depth) {
            ctx.stats_mut().heuristic_evals += 1;
            return self.game.evaluate(state);
        }

        ctx.count_expansion();
        let mut window = window;
        let mut best = side.worst();

        for action in self.game.actions(state) {
            let next = self.game.result(state, &action);
            let value = self.search(ctx, &next, window, depth + 1, side.opponent());

            if side.improves(value, best) {
                best = value;
            }

            if window.cuts_off(side, best) {
                ctx.stats_mut().prunes += 1;
                return best;
            }

            window.tighten(side, best);
        }

        ctx.store(state.clone(), best);
        best
    }

    /// Get the game reference.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Add 1 or 2 to a counter; whoever reaches `target` wins.
    /// State is `(count, max_to_move)`.
    struct Race {
        target: u8,
        horizon: u32,
    }

    impl Race {
        fn new(target: u8) -> Self {
            Self {
                target,
                horizon: u32::MAX,
            }
        }

        fn with_horizon(mut self, horizon: u32) -> Self {
            self.horizon = horizon;
            self
        }
    }

    impl Game for Race {
        type State = (u8, bool);
        type Action = u8;

        fn actions(&self, state: &Self::State) -> Vec<u8> {
            if self.is_terminal(state) {
                vec![]
            } else {
                vec![1, 2]
            }
        }

        fn result(&self, state: &Self::State, action: &u8) -> Self::State {
            ((state.0 + action).min(self.target), !state.1)
        }

        fn is_terminal(&self, state: &Self::State) -> bool {
            state.0 >= self.target
        }

        fn utility(&self, state: &Self::State) -> f64 {
            if state.1 { -1.0 } else { 1.0 }
        }

        fn should_cut_off(&self, depth: u32) -> bool {
            depth >= self.horizon
        }

        fn evaluate(&self, _state: &Self::State) -> f64 {
            0.5
        }
    }

    fn quiet() -> SearchConfig {
        SearchConfig::default().with_logging(false)
    }

    #[test]
    fn test_decide_finds_winning_move() {
        let search = MinimaxSearch::new(Race::new(4), quiet());
        let record = search.decide(&(0, true));

        assert_eq!(record.value, 1.0);
        assert_eq!(record.action, Some(1));
        assert_eq!(record.state, Some((1, false)));
        assert_eq!(record.nodes_expanded(), 7);
    }

    #[test]
    fn test_terminal_root_is_degenerate() {
        let search = MinimaxSearch::new(Race::new(4), quiet());
        let record = search.decide(&(4, false));

        assert!(record.action.is_none());
        assert!(record.state.is_none());
        assert_eq!(record.value, f64::NEG_INFINITY);
        assert_eq!(record.nodes_expanded(), 1);
    }

    #[test]
    fn test_terminal_value_ignores_window_and_depth() {
        let search = MinimaxSearch::new(Race::new(4).with_horizon(0), quiet());
        let mut ctx = SearchContext::new();

        for &(lower, upper) in &[(f64::NEG_INFINITY, f64::INFINITY), (2.0, 3.0), (-5.0, -4.0)] {
            for depth in [0, 1, 9] {
                assert_eq!(search.max_value(&mut ctx, &(4, false), lower, upper, depth), 1.0);
                assert_eq!(search.min_value(&mut ctx, &(4, true), lower, upper, depth), -1.0);
            }
        }
        assert_eq!(ctx.nodes_expanded(), 0);
        assert_eq!(ctx.cache_len(), 0);
    }

    #[test]
    fn test_cutoff_returns_evaluation() {
        let search = MinimaxSearch::new(Race::new(10).with_horizon(3), quiet());
        let mut ctx = SearchContext::new();

        let value = search.max_value(&mut ctx, &(0, true), f64::NEG_INFINITY, f64::INFINITY, 3);

        assert_eq!(value, 0.5);
        assert_eq!(ctx.nodes_expanded(), 0);
        assert_eq!(ctx.stats().heuristic_evals, 1);
    }

    #[test]
    fn test_consecutive_decisions_are_isolated() {
        let search = MinimaxSearch::new(Race::new(7), quiet());

        let first = search.decide(&(0, true));
        let second = search.decide(&(0, true));
        let other = search.decide(&(2, true));
        let again = search.decide(&(0, true));

        assert!(first.nodes_expanded() > 1);
        assert_eq!(first.nodes_expanded(), second.nodes_expanded());
        assert_eq!(first.stats.cache_hits, second.stats.cache_hits);
        assert_eq!(first.nodes_expanded(), again.nodes_expanded());
        assert!(other.nodes_expanded() >= 1);
    }

    #[test]
    fn test_disabled_cache_agrees() {
        let cached = MinimaxSearch::new(Race::new(4), quiet());
        let plain = MinimaxSearch::new(Race::new(4), quiet().with_transposition_table(false));

        let a = cached.decide(&(0, true));
        let b = plain.decide(&(0, true));

        assert_eq!(a.value, b.value);
        assert_eq!(a.action, b.action);
        assert_eq!(b.stats.cache_hits, 0);
        assert_eq!(b.stats.cache_stores, 0);
        assert_eq!(a.nodes_expanded(), b.nodes_expanded());
    }

    #[test]
    fn test_concurrent_decisions_share_engine() {
        let search = MinimaxSearch::new(Race::new(9), quiet());
        let expected = search.decide(&(0, true));

        let shared = &search;
        let records: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || shared.decide(&(0, true))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for record in records {
            assert_eq!(record.value, expected.value);
            assert_eq!(record.action, expected.action);
            assert_eq!(record.nodes_expanded(), expected.nodes_expanded());
        }
    }

    #[test]
    fn test_stats_track_depth_and_time() {
        let search = MinimaxSearch::new(Race::new(6), quiet());
        let record = search.decide(&(0, true));

        assert!(record.stats.max_depth >= 3);
        assert!(record.stats.terminal_hits > 0);
        assert_eq!(record.stats.time_us, record.elapsed.as_micros() as u64);
    }
}
