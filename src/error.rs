//! Error types for ses-relay.

use thiserror::Error;

/// Errors that can occur when delivering a message.
///
/// The SES backend performs no recovery of its own: whatever the remote
/// call returns is surfaced unchanged through one of these variants.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// Configuration error (missing env var, invalid value, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP transport failure before a well-formed response was received.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Error returned by the remote sending service.
    #[error("Provider error [{code}]: {message}")]
    Provider {
        /// Error code reported by the service (e.g. `MessageRejected`).
        code: String,
        message: String,
        /// Optional HTTP status code
        status: Option<u16>,
    },

    /// Error sending the message (capture backends, injected failures).
    #[error("Send error: {0}")]
    Send(String),
}

impl DeliveryError {
    /// Create a provider error with HTTP status.
    pub fn provider(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self::Provider {
            code: code.into(),
            message: message.into(),
            status: Some(status),
        }
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
