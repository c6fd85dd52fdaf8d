//! Winning-line tables shared by sub-board and meta-board checks.
//!
//! For an N×N grid the table holds every row, every column and both full
//! diagonals as lists of flat indices (`row * N + col`). Tables are built
//! lazily, once per supported dimension, and are read-only afterwards.

use std::sync::OnceLock;

use uttt_core::{Player, Result, UtttError};

/// Smallest supported board side.
pub const MIN_DIM: usize = 2;

/// Largest supported board side.
pub const MAX_DIM: usize = 5;

/// Default board side (classic ultimate tic-tac-toe).
pub const DEFAULT_DIM: usize = 3;

const NUM_TABLES: usize = MAX_DIM - MIN_DIM + 1;

static TABLES: [OnceLock<WinLines>; NUM_TABLES] = [const { OnceLock::new() }; NUM_TABLES];

/// Winning-line configurations for one board side.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct WinLines {
    dim: usize,
    lines: Vec<Vec<usize>>,
    weights: Vec<u32>,
}

impl WinLines {
    fn build(dim: usize) -> Self {
        let cells = dim * dim;
        let mut lines = Vec::with_capacity(2 * dim + 2);
        for i in 0..dim {
            lines.push((dim * i..dim * (i + 1)).collect()); // row
            lines.push((i..cells).step_by(dim).collect()); // column
        }
        lines.push((0..dim).map(|r| r * dim + r).collect());
        lines.push((0..dim).map(|r| r * dim + (dim - 1 - r)).collect());

        let mut weights = vec![0u32; cells];
        for line in &lines {
            for &i in line {
                weights[i] += 1;
            }
        }

        Self { dim, lines, weights }
    }

    /// Board side this table was built for.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Every winning line as a list of flat cell indices.
    pub fn lines(&self) -> &[Vec<usize>] {
        &self.lines
    }

    /// Number of winning lines passing through each cell.
    ///
    /// For the 3×3 board: corners 3, edges 2, center 4.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Sum of all cell weights.
    pub fn total_weight(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// True iff the cells marked by `player` cover at least one winning line.
    ///
    /// Works for any N²-long sequence of owners: a sub-board's cells or the
    /// meta-board's claimed owners.
    pub fn is_won(&self, marks: &[Option<Player>], player: Player) -> bool {
        debug_assert_eq!(marks.len(), self.dim * self.dim);
        self.lines
            .iter()
            .any(|line| line.iter().all(|&i| marks[i] == Some(player)))
    }
}

/// Get the winning-line table for a board side, building it on first use.
///
/// # Errors
/// Returns `UtttError::UnsupportedDimension` outside `MIN_DIM..=MAX_DIM`.
pub fn win_lines(dim: usize) -> Result<&'static WinLines> {
    if !(MIN_DIM..=MAX_DIM).contains(&dim) {
        return Err(UtttError::UnsupportedDimension(dim));
    }
    Ok(TABLES[dim - MIN_DIM].get_or_init(|| WinLines::build(dim)))
}
