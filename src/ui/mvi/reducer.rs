//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. Must be pure.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Like [`Reducer::reduce`], but tolerates a missing prior state by
    /// starting from `State::default()`.
    fn reduce_from(state: Option<Self::State>, intent: Self::Intent) -> Self::State {
        Self::reduce(state.unwrap_or_default(), intent)
    }
}
