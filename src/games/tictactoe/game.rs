//! Tic-tac-toe rules.

use serde::{Deserialize, Serialize};

use crate::rules::{DepthCutoff, Game};

use super::board::{Board, Mark, Square, LINES};

/// Tic-tac-toe from the point of view of one mark.
///
/// `maximizer` is the deciding player: `decide` must be called on boards
/// where that mark is to move. Wins are worth 1, losses -1, draws 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicTacToe {
    maximizer: Mark,
    cutoff: DepthCutoff,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            maximizer: Mark::X,
            cutoff: DepthCutoff::unlimited(),
        }
    }
}

impl TicTacToe {
    /// Full-depth tic-tac-toe deciding for X.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide for `mark` instead.
    pub fn with_maximizer(mut self, mark: Mark) -> Self {
        self.maximizer = mark;
        self
    }

    /// Stop searching `max_depth` plies below the root.
    pub fn with_cutoff(mut self, max_depth: u32) -> Self {
        self.cutoff = DepthCutoff::new(max_depth);
        self
    }

    /// The deciding player.
    #[must_use]
    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }
}

impl Game for TicTacToe {
    type State = Board;
    type Action = Square;

    fn actions(&self, state: &Board) -> Vec<Square> {
        if self.is_terminal(state) {
            return Vec::new();
        }
        state.empty_squares().collect()
    }

    fn result(&self, state: &Board, action: &Square) -> Board {
        state.play(*action)
    }

    fn is_terminal(&self, state: &Board) -> bool {
        state.winner().is_some() || state.is_full()
    }

    fn utility(&self, state: &Board) -> f64 {
        match state.winner() {
            Some(mark) if mark == self.maximizer => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }

    fn should_cut_off(&self, depth: u32) -> bool {
        self.cutoff.should_cut_off(depth)
    }

    /// Open lines: each line holding only one side's marks counts the
    /// number of those marks for that side. Scaled into (-1, 1) so no
    /// heuristic outranks a real win or loss.
    fn evaluate(&self, state: &Board) -> f64 {
        let mut score = 0i32;
        for line in &LINES {
            let cells = state.line(line);
            let mine = cells.iter().filter(|c| **c == Some(self.maximizer)).count() as i32;
            let theirs = cells
                .iter()
                .filter(|c| **c == Some(self.maximizer.other()))
                .count() as i32;
            if theirs == 0 {
                score += mine;
            } else if mine == 0 {
                score -= theirs;
            }
        }
        f64::from(score) / 20.0
    }
}
