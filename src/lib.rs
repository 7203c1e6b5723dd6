//! # ses-relay
//!
//! A mail-delivery backend that transmits pre-built MIME messages through
//! Amazon SES.
//!
//! The crate sits between a mail-sending framework and SES: the framework
//! serializes each outgoing email itself, hands the raw text (plus
//! whatever envelope fields it exposes) to a backend, and the backend
//! issues exactly one `SendRawEmail` call. No retry, no queuing, no MIME
//! construction; failure handling stays with the caller and the service.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ses_relay::{DeliveryBackend, RawMessage, SesConfig};
//! use ses_relay::backends::SesBackend;
//!
//! let config = SesConfig::from_env()?;
//! let backend = SesBackend::new(config);
//!
//! let message = RawMessage::new(mime_text)
//!     .destinations(["user@example.com"])
//!     .sender("bounces@example.com");
//!
//! let result = backend.deliver(&message).await?;
//! println!("Sent with ID: {}", result.message_id);
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `AWS_ACCESS_KEY_ID` | IAM access key |
//! | `AWS_SECRET_ACCESS_KEY` | IAM secret key |
//! | `AWS_REGION` | AWS region for SES |
//! | `AWS_SES_SOURCE_ARN` | Verified identity to send on behalf of (optional) |
//!
//! ## Testing
//!
//! [`backends::MemoryBackend`] captures deliveries in memory for
//! assertions, and the [`backends::SendRawEmail`] trait lets tests swap
//! the remote client for a double.

/// The version of the ses-relay crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod backend;
mod config;
mod error;
mod message;

pub mod backends;

// Re-exports
pub use backend::{DeliveryBackend, DeliveryResult};
pub use config::SesConfig;
pub use error::DeliveryError;
pub use message::RawMessage;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::backends::SesBackend;
    pub use crate::DeliveryBackend;
    pub use crate::DeliveryError;
    pub use crate::DeliveryResult;
    pub use crate::RawMessage;
    pub use crate::SesConfig;
}
