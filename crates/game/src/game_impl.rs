//! Implementation of the learner-facing `Game` trait.

use uttt_core::{Game, Result, Value};

use crate::lines::{win_lines, DEFAULT_DIM};
use crate::{observation, GameState, Move};

/// Ultimate tic-tac-toe on an N×N arrangement of N×N sub-boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UltimateTicTacToe {
    dim: usize,
}

impl UltimateTicTacToe {
    /// # Errors
    /// Returns `UtttError::UnsupportedDimension` for an unsupported side.
    pub fn new(dim: usize) -> Result<Self> {
        win_lines(dim)?;
        Ok(Self { dim })
    }

    /// Board side N.
    pub fn dim(&self) -> usize {
        self.dim
    }

    fn area(&self) -> usize {
        self.dim * self.dim
    }
}

impl Default for UltimateTicTacToe {
    fn default() -> Self {
        Self { dim: DEFAULT_DIM }
    }
}

impl Game for UltimateTicTacToe {
    type State = GameState;
    type Action = Move;
    type Observation = Vec<f32>;

    fn initial_state(&self) -> GameState {
        GameState::new(self.dim).expect("dimension validated in constructor")
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Move> {
        if state.is_terminal() {
            return Vec::new();
        }
        state.legal_moves().1
    }

    fn apply(&self, state: &GameState, action: Move) -> Result<GameState> {
        let mut next = state.clone();
        next.apply_move(action)?;
        Ok(next)
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        state.is_terminal()
    }

    fn outcome(&self, state: &GameState) -> Option<f32> {
        if !state.is_terminal() {
            return None;
        }
        // The turn has already passed, so the mover is the opponent of
        // the player to move.
        let mover = state.current_player().opposite();
        Some(Value::from_winner(state.winner(), mover).get())
    }

    fn observe(&self, state: &GameState) -> Vec<f32> {
        observation::encode(state)
    }

    fn action_to_index(&self, action: Move) -> usize {
        action.board * self.area() + action.cell
    }

    fn index_to_action(&self, index: usize) -> Option<Move> {
        let area = self.area();
        if index < self.num_actions() {
            Some(Move::new(index / area, index % area))
        } else {
            None
        }
    }

    fn num_actions(&self) -> usize {
        self.area() * self.area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uttt_core::{Player, UtttError};

    #[test]
    fn test_initial_state() {
        let game = UltimateTicTacToe::default();
        let state = game.initial_state();

        assert_eq!(state.current_player(), Player::X);
        assert_eq!(game.legal_actions(&state).len(), 81);
        assert!(!game.is_terminal(&state));
        assert_eq!(game.outcome(&state), None);
    }

    #[test]
    fn test_unsupported_dimension() {
        assert_eq!(
            UltimateTicTacToe::new(7).unwrap_err(),
            UtttError::UnsupportedDimension(7)
        );
    }

    #[test]
    fn test_apply_is_immutable() {
        let game = UltimateTicTacToe::default();
        let state = game.initial_state();

        let next = game.apply(&state, Move::new(2, 6)).unwrap();

        assert_eq!(state, game.initial_state());
        assert_eq!(next.sub_board(2)[6], Some(Player::X));
        assert!(game.apply(&next, Move::new(0, 0)).is_err());
    }

    #[test]
    fn test_outcome_for_winner() {
        let game = UltimateTicTacToe::default();
        let moves = [
            (0, 1), (1, 2), (2, 6), (6, 0), (0, 2), (2, 1), (1, 3), (3, 2),
            (2, 7), (7, 1), (1, 4), (4, 1), (1, 5), (5, 2), (2, 8), (8, 0), (0, 0),
        ];
        let mut state = game.initial_state();
        for (board, cell) in moves {
            state = game.apply(&state, Move::new(board, cell)).unwrap();
        }

        // X just moved and won.
        assert_eq!(game.outcome(&state), Some(1.0));
        assert!(game.legal_actions(&state).is_empty());
    }

    #[test]
    fn test_action_index_roundtrip() {
        let game = UltimateTicTacToe::new(4).unwrap();
        assert_eq!(game.num_actions(), 256);

        for index in 0..game.num_actions() {
            let action = game.index_to_action(index).unwrap();
            assert_eq!(game.action_to_index(action), index);
        }
        assert_eq!(game.index_to_action(256), None);
    }

    #[test]
    fn test_observe_matches_encoding() {
        let game = UltimateTicTacToe::default();
        let state = game.apply(&game.initial_state(), Move::new(4, 4)).unwrap();
        assert_eq!(game.observe(&state), observation::encode(&state));
    }
}
