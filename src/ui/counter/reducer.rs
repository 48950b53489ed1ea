//! Reducer for the counter widget.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::{CounterControl, CounterState};

/// Every transition is total: there is no state in which an intent fails.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => {
                let value = state.value().saturating_add(1);
                state.with_value(value)
            }
            CounterIntent::Decrement => {
                let value = state.value().saturating_sub(1);
                state.with_value(value)
            }
            CounterIntent::Reset => state.with_value(0),
            CounterIntent::Activate => {
                let control = state.focused();
                Self::reduce(state, operation(control))
            }
            CounterIntent::Press(control) => {
                Self::reduce(state.with_focus(control), operation(control))
            }
            CounterIntent::FocusNext => {
                let focused = state.focused().next();
                state.with_focus(focused)
            }
            CounterIntent::FocusPrevious => {
                let focused = state.focused().previous();
                state.with_focus(focused)
            }
        }
    }
}

fn operation(control: CounterControl) -> CounterIntent {
    match control {
        CounterControl::Add => CounterIntent::Increment,
        CounterControl::Remove => CounterIntent::Decrement,
        CounterControl::Restart => CounterIntent::Reset,
    }
}
