//! Move and active-sub-board types.

use std::fmt;

/// A move: (sub-board index, cell index), both 0-indexed and in `[0, N²)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Move {
    /// Sub-board the mark goes into.
    pub board: usize,
    /// Cell within that sub-board. Also names the sub-board the opponent
    /// must play in next.
    pub cell: usize,
}

impl Move {
    pub const fn new(board: usize, cell: usize) -> Self {
        Self { board, cell }
    }
}

impl From<(usize, usize)> for Move {
    fn from((board, cell): (usize, usize)) -> Self {
        Self::new(board, cell)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.board, self.cell)
    }
}

/// Where the next move may be played.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ActiveBoard {
    /// Any sub-board with an empty cell.
    #[default]
    Any,
    /// Only the given sub-board.
    Board(usize),
}

impl ActiveBoard {
    /// The constrained sub-board index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            ActiveBoard::Any => None,
            ActiveBoard::Board(i) => Some(i),
        }
    }
}

impl fmt::Display for ActiveBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveBoard::Any => write!(f, "any"),
            ActiveBoard::Board(i) => write!(f, "{}", i),
        }
    }
}
