use thiserror::Error;

/// Errors that can occur while playing or searching ultimate tic-tac-toe.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtttError {
    #[error("Illegal move: sub-board {board}, cell {cell}")]
    IllegalMove { board: usize, cell: usize },

    #[error("Game is already over")]
    GameOver,

    #[error("Unsupported board dimension: {0} (supported: 2..=5)")]
    UnsupportedDimension(usize),

    #[error("Invalid search depth: {0}")]
    InvalidDepth(usize),

    #[error("No legal moves available")]
    NoLegalMoves,
}

/// Convenience Result type for ultimate tic-tac-toe operations
pub type Result<T> = std::result::Result<T, UtttError>;
