//! Tic-tac-toe positions.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, ensure};
use serde::{Deserialize, Serialize};

/// A player's mark. X moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A board square, 0..9 in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(pub u8);

impl Square {
    /// Square at `row`, `col` (both 0..3).
    #[must_use]
    pub const fn at(row: u8, col: u8) -> Self {
        Self(row * 3 + col)
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }
}

/// The eight winning lines.
pub(crate) const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A tic-tac-toe position.
///
/// The side to move is implied by the marks on the board, so two boards
/// reached by different move orders compare and hash equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    /// The empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark on a square.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Mark> {
        self.cells[square.0 as usize]
    }

    /// Number of marks placed.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        if self.filled() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Empty squares in index order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Square(i as u8))
    }

    /// The board after the side to move plays `square`.
    ///
    /// # Panics
    ///
    /// Panics if `square` is occupied or off the board.
    #[must_use]
    pub fn play(&self, square: Square) -> Self {
        let index = square.0 as usize;
        assert!(self.cells[index].is_none(), "square {} is occupied", square.0);
        let mut next = *self;
        next.cells[index] = Some(self.to_move());
        next
    }

    /// The mark owning a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            line.iter()
                .all(|&i| self.cells[i] == Some(first))
                .then_some(first)
        })
    }

    /// Check if every square is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled() == 9
    }

    pub(crate) fn line(&self, line: &[usize; 3]) -> [Option<Mark>; 3] {
        [self.cells[line[0]], self.cells[line[1]], self.cells[line[2]]]
    }
}

/// Parse nine squares row by row: `X`, `O`, and `.` or `-` for empty.
/// Whitespace and `/` are ignored.
///
/// ```
/// use rust_minimax::games::tictactoe::{Board, Mark, Square};
///
/// let board: Board = "XO./.X./..O".parse().unwrap();
/// assert_eq!(board.get(Square::at(1, 1)), Some(Mark::X));
/// assert_eq!(board.to_move(), Mark::X);
/// ```
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 9];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            ensure!(count < 9, "board has more than 9 squares");
            cells[count] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' => None,
                other => bail!("unexpected character {:?} in board", other),
            };
            count += 1;
        }
        ensure!(count == 9, "board has {} squares, expected 9", count);

        let xs = cells.iter().filter(|c| **c == Some(Mark::X)).count();
        let os = cells.iter().filter(|c| **c == Some(Mark::O)).count();
        ensure!(
            xs == os || xs == os + 1,
            "unreachable position: {} X marks and {} O marks",
            xs,
            os
        );

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                let c = self.cells[row * 3 + col].map_or('.', Mark::symbol);
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
