//! Outbound email transport port.

use crate::email::domain::{Recipients, RenderedEmail};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for email transport operations.
pub type EmailSenderResult<T> = Result<T, EmailSenderError>;

/// Delivery contract for rendered digest emails.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends `email` from `sender` to every recipient.
    ///
    /// # Errors
    ///
    /// Returns [`EmailSenderError`] when the message cannot be built or the
    /// transport rejects it.
    async fn send(
        &self,
        sender: &str,
        recipients: &Recipients,
        email: &RenderedEmail,
    ) -> EmailSenderResult<()>;
}

/// Errors returned by email transport adapters.
#[derive(Debug, Clone, Error)]
pub enum EmailSenderError {
    /// The outbound message could not be assembled.
    #[error("invalid email message: {0}")]
    InvalidMessage(String),

    /// The transport failed to deliver the message.
    #[error("email delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmailSenderError {
    /// Wraps a transport error.
    #[must_use]
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
