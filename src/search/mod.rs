//! Adversarial search for rust-minimax.
//!
//! ## Overview
//!
//! Depth-limited minimax with fail-hard alpha-beta pruning and a
//! per-decision transposition table:
//!
//! - **Root decision**: `MinimaxSearch::decide` picks the maximizing
//!   player's best action and reports timing and node counts
//! - **One routine, two sides**: interior nodes are searched by a single
//!   routine tagged with a `Perspective`
//! - **Call-scoped state**: the cache and counters live in a
//!   `SearchContext` created per decision, never on the engine
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::games::tictactoe::{Board, TicTacToe};
//! use rust_minimax::search::{MinimaxSearch, SearchConfig};
//!
//! let game = TicTacToe::new();
//! let search = MinimaxSearch::new(game, SearchConfig::default());
//!
//! let record = search.decide(&Board::new());
//! if let Some(action) = &record.action {
//!     println!("Best move: {:?} (value {})", action, record.value);
//! }
//! println!("{} nodes in {:?}", record.nodes_expanded(), record.elapsed);
//! ```
//!
//! ## Known Limitations
//!
//! The cache is keyed by state only. A state searched under one cutoff
//! horizon is reused unchanged when reached again at another depth.
//!
//! The key also ignores the window. A node that completes its loop is
//! stored even when its value fell at or beyond a bound it was searched
//! with, in which case the value is only a bound. On games with
//! transpositions a later visit under a wider window can reuse it and
//! change the decision. On plain trees no state is visited twice, so the
//! result always matches exhaustive minimax.

pub mod config;
pub mod context;
pub mod minimax;
pub mod perspective;
pub mod record;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use minimax::MinimaxSearch;
pub use perspective::{Perspective, Window};
pub use record::DecisionRecord;
pub use stats::SearchStats;
