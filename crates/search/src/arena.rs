//! Game loop between two agents.

use tracing::{info, trace};
use uttt_core::{Player, Result};
use uttt_game::{GameState, Move};

use crate::agents::Agent;

/// A finished match.
#[derive(Clone, Debug)]
pub struct MatchRecord {
    /// Moves in the order they were played, starting with `X`.
    pub moves: Vec<Move>,

    /// Winner, or `None` for a draw.
    pub winner: Option<Player>,

    /// Terminal state.
    pub final_state: GameState,
}

/// Play `state` to the end, asking `x` and `o` for moves in turn.
///
/// # Errors
/// Propagates agent errors and rejects illegal moves with
/// `UtttError::IllegalMove`.
pub fn play_match(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    mut state: GameState,
) -> Result<MatchRecord> {
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = agent.choose_move(&state)?;
        state.apply_move(mv)?;
        trace!(agent = agent.name(), %mv, "\n{}", state);
        moves.push(mv);
    }

    let winner = state.winner();
    info!(
        x = x.name(),
        o = o.name(),
        winner = winner.map_or("draw".to_string(), |p| p.to_string()),
        moves = moves.len(),
        "match finished"
    );

    Ok(MatchRecord {
        moves,
        winner,
        final_state: state,
    })
}

/// Win/draw counts over a series of matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    /// Count one result.
    pub fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Combine two tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }

    /// Number of matches counted.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}
