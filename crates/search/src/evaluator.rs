//! Static evaluation of game states.
//!
//! Scores are from `X`'s point of view: positive favours `X`, negative
//! favours `O`. The `Evaluator` trait lets the search run with any scoring
//! scheme; `PositionalEvaluator` is the built-in one.

use uttt_core::{Player, Result};
use uttt_game::{win_lines, GameState};

/// Signed position score.
pub type Score = i64;

/// Trait for scoring game states.
pub trait Evaluator {
    /// Score a state from `X`'s point of view.
    fn evaluate(&self, state: &GameState) -> Score;

    /// Magnitude of a decided game. Every non-terminal score must be
    /// strictly smaller in absolute value.
    fn win_score(&self) -> Score;
}

/// Evaluator built on per-cell weights: the number of winning lines
/// through each cell (3×3: corners 3, edges 2, center 4).
///
/// - Terminal: `winner * total²`, 0 for a draw
/// - Otherwise: `total * Σ w[i] * owner(i)` over the meta-board, plus
///   `Σ w[i] * w[j] * mark(i, j)` over the cells of unclaimed sub-boards
///
/// Scaling meta-board ownership by `total` makes a valuable claimed
/// sub-board outweigh scattered cells.
#[derive(Clone, Debug)]
pub struct PositionalEvaluator {
    weights: Vec<Score>,
    total: Score,
}

impl PositionalEvaluator {
    /// # Errors
    /// Returns `UtttError::UnsupportedDimension` for an unsupported side.
    pub fn new(dim: usize) -> Result<Self> {
        let lines = win_lines(dim)?;
        let weights: Vec<Score> = lines.weights().iter().map(|&w| Score::from(w)).collect();
        let total = weights.iter().sum();
        Ok(Self { weights, total })
    }

    /// Per-cell weights.
    pub fn weights(&self) -> &[Score] {
        &self.weights
    }

    /// Sum of the weights.
    pub fn total(&self) -> Score {
        self.total
    }

    fn meta_score(&self, state: &GameState) -> Score {
        let sum: Score = self
            .weights
            .iter()
            .zip(state.meta_board())
            .map(|(w, owner)| w * Player::sign_of(*owner))
            .sum();
        self.total * sum
    }

    fn mini_score(&self, state: &GameState) -> Score {
        state
            .board()
            .sub_boards()
            .zip(state.meta_board())
            .zip(&self.weights)
            .filter(|((_, owner), _)| owner.is_none())
            .map(|((cells, _), board_weight)| {
                let cells_score: Score = self
                    .weights
                    .iter()
                    .zip(cells)
                    .map(|(w, mark)| w * Player::sign_of(*mark))
                    .sum();
                board_weight * cells_score
            })
            .sum()
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, state: &GameState) -> Score {
        debug_assert_eq!(state.dim() * state.dim(), self.weights.len());
        if state.is_terminal() {
            return Player::sign_of(state.winner()) * self.win_score();
        }
        self.meta_score(state) + self.mini_score(state)
    }

    fn win_score(&self) -> Score {
        self.total * self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uttt_game::Move;

    fn play(moves: &[(usize, usize)]) -> GameState {
        let mut state = GameState::default();
        for &(board, cell) in moves {
            state.apply_move(Move::new(board, cell)).unwrap();
        }
        state
    }

    #[test]
    fn test_standard_weights() {
        let eval = PositionalEvaluator::new(3).unwrap();
        assert_eq!(eval.weights(), &[3, 2, 3, 2, 4, 2, 3, 2, 3]);
        assert_eq!(eval.total(), 24);
        assert_eq!(eval.win_score(), 576);
    }

    #[test]
    fn test_empty_board_is_even() {
        let eval = PositionalEvaluator::new(3).unwrap();
        assert_eq!(eval.evaluate(&GameState::default()), 0);
    }

    #[test]
    fn test_cell_score() {
        let eval = PositionalEvaluator::new(3).unwrap();
        // Corner sub-board (3) times center cell (4).
        assert_eq!(eval.evaluate(&play(&[(0, 4)])), 12);
        // O answers in the center of the center: 12 - 16.
        assert_eq!(eval.evaluate(&play(&[(0, 4), (4, 4)])), -4);
    }

    #[test]
    fn test_claimed_sub_board_scores_on_meta_board() {
        let eval = PositionalEvaluator::new(3).unwrap();
        let state = play(&[(0, 0), (0, 8), (8, 8), (8, 0), (0, 1), (1, 0), (0, 2)]);

        // Meta: 24 * 3. Sub-board 8 cancels out (X and O on corners);
        // sub-board 1 holds O on a corner: -(2 * 3). Sub-board 0 is ignored.
        assert_eq!(eval.evaluate(&state), 72 - 6);
    }

    #[test]
    fn test_terminal_score() {
        let eval = PositionalEvaluator::new(3).unwrap();
        let state = play(&[
            (0, 1), (1, 2), (2, 6), (6, 0), (0, 2), (2, 1), (1, 3), (3, 2),
            (2, 7), (7, 1), (1, 4), (4, 1), (1, 5), (5, 2), (2, 8), (8, 0), (0, 0),
        ]);
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(eval.evaluate(&state), 576);
    }
}
