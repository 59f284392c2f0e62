//! Tic-tac-toe, a small game rich in transpositions.
//!
//! Boards carry no move history, so the many move orders that reach the
//! same position share one cache entry during a search.

mod board;
mod game;

pub use board::{Board, Mark, Square};
pub use game::TicTacToe;
