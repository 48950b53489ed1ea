//! Failure taxonomy for the remote reading.
//!
//! Every variant is surfaced to the user through its `Display` text; the
//! display never branches on the variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, reset mid-body, etc.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// Endpoint answered with a non-2xx status.
    #[error("Network response was not ok: {status}")]
    Status { status: u16 },

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response has no '{field}' field")]
    MissingField { field: String },

    #[error("Field '{field}' is not a number: {found}")]
    NotNumeric { field: String, found: String },
}

impl FetchError {
    /// The message rendered in the error branch of the display.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.user_message(), "Network response was not ok: 503");
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = FetchError::MissingField {
            field: "temperature".into(),
        };
        assert!(err.user_message().contains("'temperature'"));
    }

    #[test]
    fn decode_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = FetchError::from(source);
        assert!(err.user_message().starts_with("Response body is not valid JSON"));
    }
}
