use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteValueState {
    /// Request in flight. Initial state of every mount.
    #[default]
    Loading,
    Loaded {
        value: f64,
    },
    Failed {
        message: String,
    },
}

impl UiState for RemoteValueState {}

impl RemoteValueState {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Loaded { value } => Some(*value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
