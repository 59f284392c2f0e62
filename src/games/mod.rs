//! Bundled game implementations.
//!
//! - `tree`: explicit and randomly generated game trees
//! - `tictactoe`: tic-tac-toe with a depth horizon and open-line heuristic

pub mod tictactoe;
pub mod tree;
