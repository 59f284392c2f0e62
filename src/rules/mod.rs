//! Game capability consumed by the search engine.
//!
//! Games implement `Game` to define:
//! - Legal actions for each state
//! - How actions transform state
//! - Terminal detection and utility
//! - The search horizon and heuristic evaluation
//!
//! The search engine calls into `Game` but never interprets
//! game-specific concepts directly.

pub mod cutoff;
pub mod game;

pub use cutoff::DepthCutoff;
pub use game::Game;
