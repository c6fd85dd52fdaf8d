//! Ultimate tic-tac-toe core - shared types and abstractions
//!
//! This crate provides the types every other crate in the workspace
//! speaks in, plus the `Game` trait a learned-model collaborator would
//! program against.
//!
//! # Types
//!
//! - [`Player`] - The two sides, doubling as the +1/-1 sign used in scoring
//! - [`Value`] - Game outcome signal in [-1, 1]
//! - [`Game`] - Trait for learner-facing game implementations
//! - [`UtttError`] - Error type shared by all crates

mod error;
mod game;
mod types;

pub use error::{Result, UtttError};
pub use game::Game;
pub use types::{Player, Value};
