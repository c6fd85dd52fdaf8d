//! Game engine: move application, the active-sub-board constraint and
//! terminal detection.

use std::fmt;

use tracing::trace;
use uttt_core::{Player, Result, UtttError};

use crate::{ActiveBoard, Board, Move, DEFAULT_DIM};

/// Full state of one match.
///
/// Mutated only through [`GameState::apply_move`]. `Clone` is a deep copy;
/// a clone shares nothing with its source.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    board: Board,

    /// Cell index of the previous move, or `Any` before the first move.
    /// Whether it still binds is decided in `legal_moves`.
    active: ActiveBoard,

    /// Player to move.
    current: Player,

    /// Set once, on the move that completes a meta-board line.
    winner: Option<Player>,

    /// Empty cells remaining.
    squares_left: usize,
}

impl GameState {
    /// Create a fresh state: empty board, unconstrained, `X` to move.
    ///
    /// # Errors
    /// Returns `UtttError::UnsupportedDimension` for an unsupported side.
    pub fn new(dim: usize) -> Result<Self> {
        let board = Board::new(dim)?;
        let squares_left = board.total_cells();
        Ok(Self {
            board,
            active: ActiveBoard::Any,
            current: Player::X,
            winner: None,
            squares_left,
        })
    }

    /// Restore the fresh state for the same dimension.
    pub fn reset(&mut self) {
        self.board = self.board.cleared();
        self.active = ActiveBoard::Any;
        self.current = Player::X;
        self.winner = None;
        self.squares_left = self.board.total_cells();
    }

    /// Get the current player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Get the winner, if any. `None` on a terminal state is a draw.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The full board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cells of one sub-board.
    pub fn sub_board(&self, board: usize) -> &[Option<Player>] {
        self.board.sub_board(board)
    }

    /// Owner of each sub-board.
    pub fn meta_board(&self) -> &[Option<Player>] {
        self.board.meta()
    }

    /// Number of empty cells remaining.
    pub fn squares_left(&self) -> usize {
        self.squares_left
    }

    /// Board side N.
    pub fn dim(&self) -> usize {
        self.board.dim()
    }

    /// Total number of cells, N⁴.
    pub fn total_cells(&self) -> usize {
        self.board.total_cells()
    }

    /// Number of moves played so far.
    pub fn moves_played(&self) -> usize {
        self.total_cells() - self.squares_left
    }

    /// True when the board is full or someone has won.
    pub fn is_terminal(&self) -> bool {
        self.squares_left == 0 || self.winner.is_some()
    }

    /// The sub-board the next move is confined to.
    ///
    /// The previous move's cell index binds while that sub-board still has
    /// an empty cell; otherwise any sub-board is open.
    pub fn active_board(&self) -> ActiveBoard {
        match self.active {
            ActiveBoard::Board(i) if self.board.has_empty(i) => ActiveBoard::Board(i),
            _ => ActiveBoard::Any,
        }
    }

    /// Legal moves for the player to move, with the constraint they came from.
    ///
    /// Ordered by sub-board index, then cell index.
    pub fn legal_moves(&self) -> (ActiveBoard, Vec<Move>) {
        let active = self.active_board();
        let moves = match active {
            ActiveBoard::Board(board) => self.empty_cells(board).collect(),
            ActiveBoard::Any => (0..self.board.area())
                .flat_map(|board| self.empty_cells(board))
                .collect(),
        };
        (active, moves)
    }

    fn empty_cells(&self, board: usize) -> impl Iterator<Item = Move> + '_ {
        self.board
            .sub_board(board)
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(cell, _)| Move::new(board, cell))
    }

    /// True if `mv` is in the current legal-move set.
    pub fn is_legal(&self, mv: Move) -> bool {
        let area = self.board.area();
        if self.is_terminal() || mv.board >= area || mv.cell >= area {
            return false;
        }
        if self.board.get(mv.board, mv.cell).is_some() {
            return false;
        }
        match self.active_board() {
            ActiveBoard::Any => true,
            ActiveBoard::Board(i) => i == mv.board,
        }
    }

    /// Apply a move for the current player.
    ///
    /// Marks the cell, claims the sub-board if the mover just completed a
    /// line in it, sets the winner if the meta-board now has a line for the
    /// mover, then hands the turn over with the move's cell as the next
    /// active sub-board.
    ///
    /// # Errors
    /// - `UtttError::GameOver` if the state is terminal
    /// - `UtttError::IllegalMove` if `mv` is not a legal move
    ///
    /// The state is untouched when an error is returned.
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        if self.is_terminal() {
            return Err(UtttError::GameOver);
        }
        if !self.is_legal(mv) {
            return Err(UtttError::IllegalMove {
                board: mv.board,
                cell: mv.cell,
            });
        }

        let player = self.current;
        self.board.place(mv.board, mv.cell, player);

        let lines = self.board.lines();
        if self.board.owner(mv.board).is_none()
            && lines.is_won(self.board.sub_board(mv.board), player)
        {
            trace!(board = mv.board, %player, "sub-board claimed");
            self.board.claim(mv.board, player);
        }
        if lines.is_won(self.board.meta(), player) {
            trace!(%player, "meta-board line completed");
            self.winner = Some(player);
        }

        self.squares_left -= 1;
        self.active = ActiveBoard::Board(mv.cell);
        self.current = player.opposite();

        debug_assert_eq!(self.squares_left + self.board.marked_cells(), self.total_cells());
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_DIM).expect("default dimension is supported")
    }
}

impl fmt::Display for GameState {
    /// Draws the grid sub-board by sub-board: `X`, `O`, or blank per cell,
    /// `|` between sub-boards and a dashed rule between sub-board rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.dim();
        let rule = "-".repeat(dim * (dim + 1) + 1);
        for band in 0..dim {
            writeln!(f, "{}", rule)?;
            for row in 0..dim {
                for board in dim * band..dim * (band + 1) {
                    write!(f, "|")?;
                    for cell in dim * row..dim * (row + 1) {
                        match self.board.get(board, cell) {
                            Some(player) => write!(f, "{}", player)?,
                            None => write!(f, " ")?,
                        }
                    }
                }
                writeln!(f, "|")?;
            }
        }
        writeln!(f, "{}", rule)
    }
}
