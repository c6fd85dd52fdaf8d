//! Move-choosing players.
//!
//! Anything that can pick a move implements [`Agent`]. Agents only read the
//! state; the caller's game loop applies the chosen move.

use rand::seq::SliceRandom;
use rand::Rng;
use uttt_core::{Result, UtttError};
use uttt_game::{GameState, Move};

use crate::config::SearchConfig;
use crate::evaluator::{Evaluator, PositionalEvaluator};
use crate::search::Minimax;

/// A move-choosing player.
pub trait Agent {
    /// Label used in logs and summaries.
    fn name(&self) -> &str;

    /// Choose a legal move for the player to move.
    ///
    /// # Errors
    /// Returns `UtttError::GameOver` on a terminal state.
    fn choose_move(&mut self, state: &GameState) -> Result<Move>;
}

/// Agent backed by alpha-beta minimax.
#[derive(Clone, Debug)]
pub struct MinimaxAgent<E: Evaluator = PositionalEvaluator> {
    name: String,
    search: Minimax<E>,
}

impl MinimaxAgent<PositionalEvaluator> {
    /// Minimax with the positional evaluator for board side `dim`.
    pub fn new(dim: usize, config: SearchConfig) -> Result<Self> {
        Ok(Self::with_search("minimax", Minimax::positional(dim, config)?))
    }
}

impl<E: Evaluator> MinimaxAgent<E> {
    pub fn with_search(name: impl Into<String>, search: Minimax<E>) -> Self {
        Self {
            name: name.into(),
            search,
        }
    }
}

impl<E: Evaluator> Agent for MinimaxAgent<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Move> {
        self.search.choose_move(state)
    }
}

/// Agent that picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent<R: Rng> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(rng: R) -> Self {
        Self {
            name: "random".to_string(),
            rng,
        }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Move> {
        if state.is_terminal() {
            return Err(UtttError::GameOver);
        }
        let (_, moves) = state.legal_moves();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(UtttError::NoLegalMoves)
    }
}
