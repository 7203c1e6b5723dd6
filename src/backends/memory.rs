//! In-memory capture backend for development and testing.
//!
//! Records every delivered message instead of sending it, so host
//! applications can assert on outgoing mail without touching the network.
//!
//! # Testing Usage
//!
//! ```rust,ignore
//! use ses_relay::backends::MemoryBackend;
//!
//! #[tokio::test]
//! async fn test_sends_welcome_mail() {
//!     let backend = MemoryBackend::new();
//!
//!     // Code under test
//!     send_welcome_mail(&backend, "user@example.com").await;
//!
//!     assert_eq!(backend.count(), 1);
//!     let captured = backend.last().unwrap();
//!     assert!(captured.message.data.contains("Welcome"));
//! }
//! ```

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::backend::{DeliveryBackend, DeliveryResult};
use crate::error::DeliveryError;
use crate::message::RawMessage;

/// A delivered message captured by [`MemoryBackend`].
#[derive(Debug, Clone)]
pub struct CapturedMessage {
    /// Generated message ID returned to the caller.
    pub message_id: String,
    /// The message exactly as it was handed to `deliver`.
    pub message: RawMessage,
}

/// Delivery backend that stores messages in memory.
pub struct MemoryBackend {
    captured: RwLock<Vec<CapturedMessage>>,
    /// If set, deliver() will return this error (for testing error paths).
    fail_with: RwLock<Option<String>>,
}

impl MemoryBackend {
    /// Create a new backend with empty storage.
    pub fn new() -> Self {
        Self {
            captured: RwLock::new(Vec::new()),
            fail_with: RwLock::new(None),
        }
    }

    /// Configure the backend to fail with an error message.
    ///
    /// ```rust,ignore
    /// let backend = MemoryBackend::new();
    /// backend.set_failure("connection refused");
    ///
    /// let result = backend.deliver(&message).await;
    /// assert!(result.is_err());
    /// ```
    pub fn set_failure(&self, message: impl Into<String>) {
        *self.fail_with.write() = Some(message.into());
    }

    /// Clear the failure state.
    pub fn clear_failure(&self) {
        *self.fail_with.write() = None;
    }

    /// Get all captured messages, oldest first.
    pub fn messages(&self) -> Vec<CapturedMessage> {
        self.captured.read().clone()
    }

    /// Get the most recently captured message.
    pub fn last(&self) -> Option<CapturedMessage> {
        self.captured.read().last().cloned()
    }

    /// Number of captured messages.
    pub fn count(&self) -> usize {
        self.captured.read().len()
    }

    /// Drop all captured messages.
    pub fn clear(&self) {
        self.captured.write().clear();
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryBackend for MemoryBackend {
    async fn deliver(&self, message: &RawMessage) -> Result<DeliveryResult, DeliveryError> {
        if let Some(failure) = self.fail_with.read().clone() {
            return Err(DeliveryError::Send(failure));
        }

        let message_id = uuid::Uuid::new_v4().to_string();
        self.captured.write().push(CapturedMessage {
            message_id: message_id.clone(),
            message: message.clone(),
        });

        tracing::debug!(message_id = %message_id, "Captured message in memory");

        Ok(DeliveryResult::new(message_id))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_delivered_messages() {
        let backend = MemoryBackend::new();

        let message = RawMessage::new("Subject: Hi\r\n\r\nBody").sender("a@x.com");
        let result = backend.deliver(&message).await.unwrap();

        assert_eq!(backend.count(), 1);
        let captured = backend.last().unwrap();
        assert_eq!(captured.message, message);
        assert_eq!(captured.message_id, result.message_id);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let backend = MemoryBackend::new();
        backend.set_failure("connection refused");

        let result = backend.deliver(&RawMessage::new("raw")).await;
        assert!(matches!(result, Err(DeliveryError::Send(ref m)) if m == "connection refused"));
        assert_eq!(backend.count(), 0);

        backend.clear_failure();
        assert!(backend.deliver(&RawMessage::new("raw")).await.is_ok());
    }

    #[test]
    fn test_backend_name() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.backend_name(), "memory");
    }
}
