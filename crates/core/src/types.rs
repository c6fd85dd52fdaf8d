//! Domain types shared across the workspace.
//!
//! - Player: one of the two sides, carrying the +1/-1 sign used by win
//!   checks and evaluation
//! - Value: game outcome signal in [-1, 1]

use std::fmt;

/// One of the two sides.
///
/// `X` moves first and scores positive; `O` scores negative.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player.
    pub fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed identity: +1 for `X`, -1 for `O`.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Inverse of [`Player::sign`]. Zero and other values map to `None`.
    pub fn from_sign(sign: i64) -> Option<Self> {
        match sign {
            1 => Some(Player::X),
            -1 => Some(Player::O),
            _ => None,
        }
    }

    /// Signed value of an optional owner: the player's sign, or 0 when empty.
    #[inline]
    pub fn sign_of(owner: Option<Player>) -> i64 {
        owner.map_or(0, Player::sign)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A game outcome signal.
///
/// Invariant: Value is in range [-1, 1] where:
/// - +1 means the perspective player won
/// - -1 means the perspective player lost
/// - 0 means a draw
///
/// # Example
/// ```
/// use uttt_core::{Player, Value};
///
/// let value = Value::from_winner(Some(Player::X), Player::O);
/// assert_eq!(value, Value::LOSS);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value(f32);

impl Value {
    /// Value for a win.
    pub const WIN: Self = Self(1.0);

    /// Value for a loss.
    pub const LOSS: Self = Self(-1.0);

    /// Value for a draw.
    pub const DRAW: Self = Self(0.0);

    /// Outcome of a finished game as seen by `perspective`.
    ///
    /// `None` as winner is a draw.
    pub fn from_winner(winner: Option<Player>, perspective: Player) -> Self {
        match winner {
            Some(w) if w == perspective => Self::WIN,
            Some(_) => Self::LOSS,
            None => Self::DRAW,
        }
    }

    /// Get the underlying value.
    pub fn get(self) -> f32 {
        self.0
    }
}
