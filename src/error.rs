//! Error types for List Management API operations.

use thiserror::Error;

/// Errors that can occur during List Management API operations.
#[derive(Debug, Error)]
pub enum ListApiError {
    /// The API answered with a status code outside the 2xx range.
    ///
    /// The message is always the JSON-encoded literal `"Error"`; the status
    /// code is the only field that identifies what went wrong.
    #[error("{message}")]
    Api { status_code: u16, message: String },

    /// HTTP transport error from the built-in reqwest transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport implementation.
    ///
    /// Passed through unchanged so callers see exactly what the transport
    /// reported.
    #[error(transparent)]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// A request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ListApiError {
    /// Status code of the failed call, when a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for List Management API operations.
pub type Result<T> = core::result::Result<T, ListApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_message_only() {
        let err = ListApiError::Api {
            status_code: 404,
            message: "\"Error\"".to_string(),
        };
        assert_eq!(err.to_string(), "\"Error\"");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn transport_error_is_transparent() {
        let err = ListApiError::Transport("connection reset".into());
        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(err.status_code(), None);
    }
}
