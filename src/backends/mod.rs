//! Delivery backend implementations.
//!
//! Each backend implements the [`DeliveryBackend`](crate::DeliveryBackend)
//! trait.
//!
//! | Backend | Description |
//! |---------|-------------|
//! | [`SesBackend`] | Amazon SES SendRawEmail over HTTPS |
//! | [`MemoryBackend`] | In-memory capture for dev/testing |

mod memory;
mod ses;

pub use memory::{CapturedMessage, MemoryBackend};
pub use ses::{SendRawEmail, SendRawEmailRequest, SesBackend, SesClient};
