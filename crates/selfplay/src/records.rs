//! Game records written by the `generate` command.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use uttt_core::{Game, Player};
use uttt_game::UltimateTicTacToe;
use uttt_search::MatchRecord;

/// A single ply of a recorded game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStep {
    /// Observation tensor from the mover's perspective (N² × N² × 2 floats),
    /// set entries scaled by the mover's sign.
    pub observation: Vec<f32>,

    /// Action index, `board * N² + cell`.
    pub action: u16,

    /// Mover: +1 for X, -1 for O.
    pub player: i8,
}

/// A complete recorded game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameRecord {
    /// Sequence of plies.
    pub steps: Vec<GameStep>,

    /// Game outcome: +1 (X wins), -1 (O wins), 0 (draw).
    pub outcome: f32,

    /// Optional metadata.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl GameRecord {
    /// Replay a finished match, capturing the observation before each ply.
    pub fn from_match(record: &MatchRecord, dim: usize, seed: u64) -> Result<Self> {
        let game = UltimateTicTacToe::new(dim)?;
        let mut state = game.initial_state();
        let mut steps = Vec::with_capacity(record.moves.len());

        for &mv in &record.moves {
            let action = u16::try_from(game.action_to_index(mv))
                .with_context(|| format!("Action index out of range for {}", mv))?;
            steps.push(GameStep {
                observation: game.observe(&state),
                action,
                player: state.current_player().sign() as i8,
            });
            state = game.apply(&state, mv)?;
        }

        let mut metadata = HashMap::new();
        metadata.insert("seed".to_string(), serde_json::json!(seed));
        metadata.insert("dim".to_string(), serde_json::json!(dim));
        metadata.insert("moves".to_string(), serde_json::json!(record.moves.len()));

        Ok(Self {
            steps,
            outcome: Player::sign_of(record.winner) as f32,
            metadata,
        })
    }

    /// Write as MessagePack with named fields.
    pub fn write(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        // Named fields serialize structs as maps, not arrays
        rmp_serde::encode::write_named(&mut writer, self)
            .with_context(|| format!("Failed to serialize game to {:?}", path))?;
        Ok(())
    }

    /// Winner implied by the outcome.
    pub fn winner(&self) -> Option<Player> {
        Player::from_sign(self.outcome as i64)
    }
}
