//! Adversarial search for ultimate tic-tac-toe.
//!
//! This crate provides a static positional evaluator, minimax search with
//! alpha-beta pruning, and the players built on them.
//!
//! # Features
//!
//! - **Positional evaluation**: cell and sub-board weights from the number
//!   of winning lines through each square
//! - **Alpha-beta minimax**: deterministic, ties broken by move order
//! - **Adaptive depth**: deeper search as the board fills
//! - **Agents**: minimax and seeded random players behind one trait
//!
//! # Example
//!
//! ```
//! use uttt_game::{GameState, Move};
//! use uttt_search::{Minimax, SearchConfig};
//!
//! let search = Minimax::positional(3, SearchConfig::with_depth(2).unwrap()).unwrap();
//! let result = search.search(&GameState::default()).unwrap();
//!
//! assert_eq!(result.best_move, Move::new(4, 4));
//! println!("score {} after {} nodes", result.score, result.nodes);
//! ```

pub mod agents;
pub mod arena;
pub mod config;
pub mod evaluator;
pub mod search;

pub use agents::{Agent, MinimaxAgent, RandomAgent};
pub use arena::{play_match, MatchRecord, Tally};
pub use config::SearchConfig;
pub use evaluator::{Evaluator, PositionalEvaluator, Score};
pub use search::{Minimax, SearchResult};
