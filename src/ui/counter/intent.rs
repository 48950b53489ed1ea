//! Intents for the counter widget.

use crate::ui::mvi::Intent;

use super::state::CounterControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// ADD: value + 1.
    Increment,

    /// REMOVE: value - 1, floored at zero.
    Decrement,

    /// RESTART: value = 0.
    Reset,

    /// Run the operation of the focused control (Enter/Space).
    Activate,

    /// Run the operation of a specific control (mouse click).
    Press(CounterControl),

    FocusNext,
    FocusPrevious,
}

impl Intent for CounterIntent {}
