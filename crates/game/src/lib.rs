//! Ultimate tic-tac-toe game engine.
//!
//! A 3×3 grid of 3×3 sub-boards (generalized to N×N): winning a line of
//! sub-boards wins the game, and the cell played picks the sub-board the
//! opponent must answer in.
//!
//! # Example
//!
//! ```
//! use uttt_game::{ActiveBoard, GameState, Move};
//!
//! let mut state = GameState::default();
//! state.apply_move(Move::new(0, 4)).unwrap();
//!
//! let (active, moves) = state.legal_moves();
//! assert_eq!(active, ActiveBoard::Board(4));
//! assert_eq!(moves.len(), 9);
//! ```

mod board;
mod game_impl;
pub mod lines;
mod moves;
pub mod observation;
mod state;

pub use board::Board;
pub use game_impl::UltimateTicTacToe;
pub use lines::{win_lines, WinLines, DEFAULT_DIM, MAX_DIM, MIN_DIM};
pub use moves::{ActiveBoard, Move};
pub use state::GameState;
