//! Delivery backend trait and result types.
//!
//! # Architecture: Why `async_trait`?
//!
//! This module uses `#[async_trait]` instead of native async traits because
//! host frameworks typically hold their delivery backend as an
//! `Arc<dyn DeliveryBackend>` chosen at startup, and native async traits
//! are not object-safe. The boxed-future overhead is one heap allocation
//! per delivery, which network latency dominates by orders of magnitude.
//!
//! Callers that hold a concrete backend type can still call `deliver`
//! directly without any dynamic dispatch.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::DeliveryError;
use crate::message::RawMessage;

/// Result of a successful delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResult {
    /// Message ID assigned by the provider
    pub message_id: String,
    /// Optional provider-specific response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_response: Option<serde_json::Value>,
}

impl DeliveryResult {
    /// Create a new delivery result with just a message ID.
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            provider_response: None,
        }
    }

    /// Create a delivery result with provider response.
    pub fn with_response(message_id: impl Into<String>, response: serde_json::Value) -> Self {
        Self {
            message_id: message_id.into(),
            provider_response: Some(response),
        }
    }
}

/// Trait for mail-delivery backends.
///
/// The host mail-sending framework constructs one backend at startup and
/// calls [`deliver`](DeliveryBackend::deliver) once per outgoing message.
///
/// # Example
///
/// ```ignore
/// use ses_relay::{DeliveryBackend, RawMessage, SesConfig};
/// use ses_relay::backends::SesBackend;
///
/// let backend = SesBackend::new(SesConfig::from_env()?);
///
/// let message = RawMessage::new(mime_text).sender("bounces@example.com");
/// let result = backend.deliver(&message).await?;
/// println!("Sent with ID: {}", result.message_id);
/// ```
#[async_trait]
pub trait DeliveryBackend: Send + Sync {
    /// Deliver a single pre-serialized message.
    ///
    /// Exactly one attempt is made; whatever the remote call returns or
    /// raises is surfaced unchanged. Retry policy belongs to the caller.
    async fn deliver(&self, message: &RawMessage) -> Result<DeliveryResult, DeliveryError>;

    /// Settings-introspection hook required by mail-sending frameworks.
    ///
    /// Always empty: a backend carries no framework-visible settings.
    fn settings(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Get the backend name (for logging/debugging).
    fn backend_name(&self) -> &'static str {
        "unknown"
    }
}
