//! Nested board storage: N² sub-boards of N² cells plus the meta-board of
//! sub-board owners.

use uttt_core::{Player, Result};

use crate::lines::{win_lines, WinLines};

/// Cell marks and sub-board owners for one match.
///
/// Cells are stored flat, sub-board by sub-board:
/// `cells[board * N² + cell]`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    dim: usize,
    cells: Vec<Option<Player>>,
    meta: Vec<Option<Player>>,
    lines: &'static WinLines,
}

impl Board {
    /// Create an empty board with side `dim`.
    ///
    /// # Errors
    /// Returns `UtttError::UnsupportedDimension` if `dim` has no win-line table.
    pub fn new(dim: usize) -> Result<Self> {
        Ok(Self::with_lines(win_lines(dim)?))
    }

    fn with_lines(lines: &'static WinLines) -> Self {
        let dim = lines.dim();
        let area = dim * dim;
        Self {
            dim,
            cells: vec![None; area * area],
            meta: vec![None; area],
            lines,
        }
    }

    /// An empty board of the same side.
    pub fn cleared(&self) -> Self {
        Self::with_lines(self.lines)
    }

    /// Board side N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of cells in one sub-board (and sub-boards in the match), N².
    #[inline]
    pub fn area(&self) -> usize {
        self.dim * self.dim
    }

    /// Total number of cells across all sub-boards, N⁴.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// The cells of one sub-board.
    ///
    /// # Panics
    /// Panics if `board >= N²`.
    pub fn sub_board(&self, board: usize) -> &[Option<Player>] {
        let area = self.area();
        &self.cells[board * area..(board + 1) * area]
    }

    /// All sub-boards in index order.
    pub fn sub_boards(&self) -> impl Iterator<Item = &[Option<Player>]> {
        self.cells.chunks(self.area())
    }

    /// Owner of each sub-board, `None` while unclaimed.
    pub fn meta(&self) -> &[Option<Player>] {
        &self.meta
    }

    /// The mark at a cell, if any.
    #[inline]
    pub fn get(&self, board: usize, cell: usize) -> Option<Player> {
        self.cells[board * self.area() + cell]
    }

    /// Owner of a sub-board, if claimed.
    #[inline]
    pub fn owner(&self, board: usize) -> Option<Player> {
        self.meta[board]
    }

    /// True if the sub-board has at least one empty cell.
    pub fn has_empty(&self, board: usize) -> bool {
        self.sub_board(board).iter().any(Option::is_none)
    }

    /// Number of marked cells across the whole board.
    pub fn marked_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The win-line table for this board's side.
    pub fn lines(&self) -> &'static WinLines {
        self.lines
    }

    /// Mark an empty cell. Cells are write-once.
    pub(crate) fn place(&mut self, board: usize, cell: usize, player: Player) {
        let index = board * self.area() + cell;
        debug_assert!(self.cells[index].is_none(), "cell {index} already marked");
        self.cells[index] = Some(player);
    }

    /// Record a sub-board owner. Owners are write-once.
    pub(crate) fn claim(&mut self, board: usize, player: Player) {
        debug_assert!(self.meta[board].is_none(), "sub-board {board} already claimed");
        self.meta[board] = Some(player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uttt_core::UtttError;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.dim(), 3);
        assert_eq!(board.area(), 9);
        assert_eq!(board.total_cells(), 81);
        assert_eq!(board.marked_cells(), 0);
        assert!(board.meta().iter().all(Option::is_none));
        assert_eq!(board.sub_boards().count(), 9);
    }

    #[test]
    fn test_unsupported_dimension() {
        assert_eq!(Board::new(0).unwrap_err(), UtttError::UnsupportedDimension(0));
        assert_eq!(Board::new(9).unwrap_err(), UtttError::UnsupportedDimension(9));
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new(3).unwrap();
        board.place(4, 2, Player::O);

        assert_eq!(board.get(4, 2), Some(Player::O));
        assert_eq!(board.sub_board(4)[2], Some(Player::O));
        assert_eq!(board.get(2, 4), None);
        assert_eq!(board.marked_cells(), 1);
    }

    #[test]
    fn test_has_empty() {
        let mut board = Board::new(2).unwrap();
        for cell in 0..4 {
            assert!(board.has_empty(1));
            board.place(1, cell, Player::X);
        }
        assert!(!board.has_empty(1));
        assert!(board.has_empty(0));
    }

    #[test]
    fn test_claim() {
        let mut board = Board::new(3).unwrap();
        board.claim(7, Player::X);
        assert_eq!(board.owner(7), Some(Player::X));
        assert_eq!(board.meta()[7], Some(Player::X));
    }
}
