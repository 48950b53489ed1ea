//! Reducer for the remote value display.

use crate::ui::mvi::Reducer;

use super::intent::RemoteIntent;
use super::state::RemoteValueState;

/// `Loaded` and `Failed` are terminal; outcomes arriving after either are
/// dropped without changing the state.
pub struct RemoteReducer;

impl Reducer for RemoteReducer {
    type State = RemoteValueState;
    type Intent = RemoteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state {
            RemoteValueState::Loading => match intent {
                RemoteIntent::Resolved { value } => RemoteValueState::Loaded { value },
                RemoteIntent::Failed { message } => RemoteValueState::Failed { message },
            },
            settled => settled,
        }
    }
}
