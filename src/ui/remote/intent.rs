//! Intents for the remote value display.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteIntent {
    /// The fetch produced a number.
    Resolved { value: f64 },

    /// The fetch failed; `message` is shown verbatim after the error label.
    Failed { message: String },
}

impl Intent for RemoteIntent {}

impl From<Result<f64, String>> for RemoteIntent {
    fn from(result: Result<f64, String>) -> Self {
        match result {
            Ok(value) => Self::Resolved { value },
            Err(message) => Self::Failed { message },
        }
    }
}
