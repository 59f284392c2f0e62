//! # rust-minimax
//!
//! A decision engine for deterministic, perfect-information, two-player
//! zero-sum games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine knows nothing about boards or pieces.
//!    Games describe themselves through the `Game` trait.
//!
//! 2. **Call-Scoped State**: Every decision gets a fresh transposition table
//!    and fresh counters. Nothing carries over between decisions.
//!
//! 3. **Synchronous**: A decision runs to completion on the calling thread.
//!    There is no cancellation and no internal parallelism.
//!
//! ## Architecture
//!
//! - **Alpha-Beta Minimax**: Fail-hard pruning at interior nodes. The root
//!   narrows its own lower bound but always examines every action.
//!
//! - **Transposition Table**: Values of fully searched nodes are memoized by
//!   state for the duration of one decision. Keys ignore depth and window;
//!   see `search`.
//!
//! - **Instrumentation**: Each decision reports wall-clock time, nodes
//!   expanded, cache hits and prunes.
//!
//! ## Modules
//!
//! - `rules`: The `Game` trait and reusable cutoff policies
//! - `search`: Minimax search, configuration, statistics, decision records
//! - `games`: Bundled games (explicit trees, tic-tac-toe)

pub mod rules;
pub mod search;
pub mod games;

// Re-export commonly used types
pub use crate::rules::{DepthCutoff, Game};

pub use crate::search::{
    DecisionRecord, MinimaxSearch, Perspective, SearchConfig, SearchContext, SearchStats, Window,
};
