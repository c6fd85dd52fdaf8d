use std::hash::Hash;

use crate::Result;

/// A game abstraction for learned-model collaborators.
///
/// This is the surface a self-play trainer consumes: state transitions,
/// terminal outcomes and a fixed-size numeric observation per state.
/// The engine's own search works on the concrete state type directly.
pub trait Game: Clone + Send + Sync {
    /// The game state
    type State: Clone + Send;

    /// A game action
    type Action: Clone + Copy + Send + Eq + Hash;

    /// The observation format for a value/policy estimator
    type Observation;

    /// Returns the initial game state
    fn initial_state(&self) -> Self::State;

    /// Returns all legal actions from the given state
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state and leaving the input untouched.
    ///
    /// # Errors
    /// Returns an error if the action is not legal in `state`.
    fn apply(&self, state: &Self::State, action: Self::Action) -> Result<Self::State>;

    /// Returns true if the game has ended (win or full board)
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Returns the game outcome from the perspective of the player who just moved:
    /// - `Some(1.0)` if that player won
    /// - `Some(-1.0)` if that player lost
    /// - `Some(0.0)` for a draw
    /// - `None` if the game is not terminal
    fn outcome(&self, state: &Self::State) -> Option<f32>;

    /// Converts game state to the estimator's observation format
    fn observe(&self, state: &Self::State) -> Self::Observation;

    /// Maps an action to a flat index for the policy vector
    fn action_to_index(&self, action: Self::Action) -> usize;

    /// Maps a flat index back to an action, returning None if invalid
    fn index_to_action(&self, index: usize) -> Option<Self::Action>;

    /// Total number of possible action indices (size of policy vector)
    fn num_actions(&self) -> usize;
}
