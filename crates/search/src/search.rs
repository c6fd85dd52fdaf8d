//! Minimax search with alpha-beta pruning.
//!
//! `X` maximizes and `O` minimizes the evaluator's score. Each explored
//! node works on its own clone of the state, so sibling branches never see
//! each other's moves.

use tracing::debug;
use uttt_core::{Player, Result, UtttError};
use uttt_game::{GameState, Move};

use crate::config::SearchConfig;
use crate::evaluator::{Evaluator, PositionalEvaluator, Score};

/// Result of a minimax search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the player to move.
    pub best_move: Move,

    /// Minimax score of the root, from `X`'s point of view.
    pub score: Score,

    /// Depth searched, in plies.
    pub depth: usize,

    /// Nodes visited, leaves included.
    pub nodes: u64,

    /// Sibling lists cut short by pruning.
    pub cutoffs: u64,
}

/// An alpha or beta bound together with the move that set it.
#[derive(Clone, Copy, Debug)]
struct Bound {
    score: Score,
    mv: Option<Move>,
}

impl Bound {
    fn leaf(score: Score) -> Self {
        Self { score, mv: None }
    }
}

#[derive(Default)]
struct Stats {
    nodes: u64,
    cutoffs: u64,
}

/// Minimax searcher with alpha-beta pruning.
#[derive(Clone, Debug)]
pub struct Minimax<E: Evaluator = PositionalEvaluator> {
    evaluator: E,
    config: SearchConfig,
}

impl Minimax<PositionalEvaluator> {
    /// Searcher using the positional evaluator for board side `dim`.
    ///
    /// # Errors
    /// Returns `UtttError::UnsupportedDimension` for an unsupported side.
    pub fn positional(dim: usize, config: SearchConfig) -> Result<Self> {
        Ok(Self::new(PositionalEvaluator::new(dim)?, config))
    }
}

impl<E: Evaluator> Minimax<E> {
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick the best move for the player to move.
    ///
    /// # Errors
    /// - `UtttError::GameOver` if the state is terminal
    /// - `UtttError::InvalidDepth` if the configured depth is zero
    pub fn choose_move(&self, state: &GameState) -> Result<Move> {
        self.search(state).map(|result| result.best_move)
    }

    /// Search to the configured depth (or the adaptive default).
    pub fn search(&self, state: &GameState) -> Result<SearchResult> {
        self.search_to_depth(state, self.config.depth_for(state))
    }

    /// Search exactly `depth` plies ahead.
    ///
    /// # Errors
    /// - `UtttError::GameOver` if the state is terminal
    /// - `UtttError::InvalidDepth` if `depth` is zero
    pub fn search_to_depth(&self, state: &GameState, depth: usize) -> Result<SearchResult> {
        if depth == 0 {
            return Err(UtttError::InvalidDepth(depth));
        }
        if state.is_terminal() {
            return Err(UtttError::GameOver);
        }

        let inf = self.infinity();
        let mut stats = Stats::default();
        let root = self.alpha_beta(state, Bound::leaf(-inf), Bound::leaf(inf), depth, &mut stats)?;

        // Every child scores within (-inf, inf), so the root always
        // tightens its own bound with one of its moves.
        let best_move = root.mv.ok_or(UtttError::NoLegalMoves)?;

        debug!(
            player = %state.current_player(),
            depth,
            score = root.score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            %best_move,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            score: root.score,
            depth,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
        })
    }

    /// One past the largest score the evaluator can produce.
    fn infinity(&self) -> Score {
        self.evaluator.win_score() + 1
    }

    /// Fail-hard alpha-beta.
    ///
    /// Children are searched with the window as it stands when they are
    /// reached. Ties keep the earlier move. The maximizer returns its final
    /// alpha and the minimizer its final beta.
    fn alpha_beta(
        &self,
        state: &GameState,
        mut alpha: Bound,
        mut beta: Bound,
        depth: usize,
        stats: &mut Stats,
    ) -> Result<Bound> {
        stats.nodes += 1;
        if depth == 0 || state.is_terminal() {
            return Ok(Bound::leaf(self.evaluator.evaluate(state)));
        }

        let player = state.current_player();
        let mut best = Bound::leaf(-player.sign() * self.infinity());

        let (_, moves) = state.legal_moves();
        debug_assert!(!moves.is_empty(), "non-terminal state without legal moves");

        for mv in moves {
            let mut child = state.clone();
            child.apply_move(mv)?;
            let score = self.alpha_beta(&child, alpha, beta, depth - 1, stats)?.score;

            match player {
                Player::X => {
                    if score > best.score {
                        best = Bound { score, mv: Some(mv) };
                    }
                    if best.score > alpha.score {
                        alpha = best;
                    }
                }
                Player::O => {
                    if score < best.score {
                        best = Bound { score, mv: Some(mv) };
                    }
                    if best.score < beta.score {
                        beta = best;
                    }
                }
            }

            if alpha.score >= beta.score {
                stats.cutoffs += 1;
                break;
            }
        }

        Ok(match player {
            Player::X => alpha,
            Player::O => beta,
        })
    }
}
