use crate::ui::mvi::UiState;

/// Value a freshly mounted counter shows.
pub const INITIAL_VALUE: u64 = 1;

/// The three labeled controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterControl {
    #[default]
    Add,
    Remove,
    Restart,
}

impl CounterControl {
    pub const ALL: [CounterControl; 3] = [Self::Add, Self::Remove, Self::Restart];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Remove => "REMOVE",
            Self::Restart => "RESTART",
        }
    }

    /// Primary key bound to the control.
    pub fn shortcut(self) -> char {
        match self {
            Self::Add => '+',
            Self::Remove => '-',
            Self::Restart => '0',
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Restart,
            Self::Restart => Self::Add,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Add => Self::Restart,
            Self::Remove => Self::Add,
            Self::Restart => Self::Remove,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    value: u64,
    focused: CounterControl,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            value: INITIAL_VALUE,
            focused: CounterControl::default(),
        }
    }
}

impl UiState for CounterState {}

impl CounterState {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn focused(&self) -> CounterControl {
        self.focused
    }

    pub(super) fn with_value(self, value: u64) -> Self {
        Self { value, ..self }
    }

    pub(super) fn with_focus(self, focused: CounterControl) -> Self {
        Self { focused, ..self }
    }
}
