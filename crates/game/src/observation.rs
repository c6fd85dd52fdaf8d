//! Observation encoding for learned value/policy estimators.
//!
//! A state becomes a `(side, side, 2)` tensor with `side = N²`:
//! channel 0 marks cells owned by the player to move, channel 1 cells
//! owned by the opponent. Set entries hold the mover's sign, `1.0` when X
//! is to move and `-1.0` when O is. Sub-board `b`, cell `c` lands at
//!
//! ```text
//! x = N * (b % N) + (c % N)
//! y = N * (b / N) + (c / N)
//! ```
//!
//! so the tensor looks like the board as drawn on paper.

use crate::GameState;

/// Number of channels in the observation tensor.
pub const CHANNELS: usize = 2;

/// Channel holding the player-to-move's cells.
pub const OWN_CHANNEL: usize = 0;

/// Channel holding the opponent's cells.
pub const OPPONENT_CHANNEL: usize = 1;

/// Side length of the observation grid for board side `dim`.
#[inline]
pub fn side(dim: usize) -> usize {
    dim * dim
}

/// Total number of floats in the observation for board side `dim`.
#[inline]
pub fn observation_size(dim: usize) -> usize {
    side(dim) * side(dim) * CHANNELS
}

/// Grid coordinates `(x, y)` of a cell.
#[inline]
pub fn coords(dim: usize, board: usize, cell: usize) -> (usize, usize) {
    let x = dim * (board % dim) + cell % dim;
    let y = dim * (board / dim) + cell / dim;
    (x, y)
}

/// Flat index into the encoded tensor.
///
/// Layout is row-major `[y][x][channel]`.
#[inline]
pub fn tensor_index(dim: usize, x: usize, y: usize, channel: usize) -> usize {
    (y * side(dim) + x) * CHANNELS + channel
}

/// Encode a state into its observation tensor.
pub fn encode(state: &GameState) -> Vec<f32> {
    let dim = state.dim();
    let me = state.current_player();
    let value = me.sign() as f32;
    let mut obs = vec![0.0f32; observation_size(dim)];

    for (board, cells) in state.board().sub_boards().enumerate() {
        for (cell, mark) in cells.iter().enumerate() {
            let Some(owner) = *mark else { continue };
            let (x, y) = coords(dim, board, cell);
            let channel = if owner == me { OWN_CHANNEL } else { OPPONENT_CHANNEL };
            obs[tensor_index(dim, x, y, channel)] = value;
        }
    }

    obs
}
