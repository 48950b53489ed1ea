use super::intent::Intent;
use super::state::UiState;

/// The only place a component's state changes.
///
/// Must be pure: `(State, Intent) -> State`, no I/O, no logging.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
