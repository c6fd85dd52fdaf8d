//! Search configuration.

use uttt_core::{Result, UtttError};
use uttt_game::GameState;

/// Minimax search parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Fixed search depth in plies. `None` picks a depth from the game's
    /// progress (see [`SearchConfig::depth_for`]).
    pub depth: Option<usize>,
}

impl SearchConfig {
    /// Search to a fixed depth.
    ///
    /// # Errors
    /// Returns `UtttError::InvalidDepth` for a depth of zero, which could
    /// never produce a move.
    pub fn with_depth(depth: usize) -> Result<Self> {
        if depth == 0 {
            return Err(UtttError::InvalidDepth(depth));
        }
        Ok(Self { depth: Some(depth) })
    }

    /// Search deeper as the game fills up.
    pub fn adaptive() -> Self {
        Self { depth: None }
    }

    /// Depth to search from `state`.
    ///
    /// Adaptive depth is `floor(log2(moves_played + 1)) + 1`: one ply at the
    /// opening, growing as the branching factor shrinks.
    pub fn depth_for(&self, state: &GameState) -> usize {
        self.depth
            .unwrap_or_else(|| (state.moves_played() + 1).ilog2() as usize + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uttt_game::Move;

    #[test]
    fn test_default_is_adaptive() {
        assert_eq!(SearchConfig::default(), SearchConfig::adaptive());
    }

    #[test]
    fn test_with_depth() {
        let config = SearchConfig::with_depth(3).unwrap();
        assert_eq!(config.depth_for(&GameState::default()), 3);
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(SearchConfig::with_depth(0), Err(UtttError::InvalidDepth(0)));
    }

    #[test]
    fn test_adaptive_depth_grows() {
        let config = SearchConfig::adaptive();
        let mut state = GameState::default();
        assert_eq!(config.depth_for(&state), 1);

        // After 1, 3 and 7 moves: log2(2) + 1, log2(4) + 1, log2(8) + 1.
        let moves = [(4, 4), (4, 0), (0, 4), (4, 1), (1, 4), (4, 2), (2, 4)];
        let expected = [2, 2, 3, 3, 3, 3, 4];
        for (&(board, cell), &depth) in moves.iter().zip(&expected) {
            state.apply_move(Move::new(board, cell)).unwrap();
            assert_eq!(config.depth_for(&state), depth);
        }
    }
}
