//! In-memory outbox for email transport tests.

use crate::email::{
    domain::{Recipients, RenderedEmail},
    ports::{EmailSender, EmailSenderError, EmailSenderResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// A message captured by [`InMemoryOutbox`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// From address.
    pub sender: String,
    /// Destination addresses.
    pub recipients: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
}

/// Thread-safe outbox that records every message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOutbox {
    sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl InMemoryOutbox {
    /// Creates an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages sent so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`EmailSenderError::Delivery`] when lock acquisition fails.
    pub fn sent(&self) -> EmailSenderResult<Vec<SentEmail>> {
        let sent = self
            .sent
            .read()
            .map_err(|err| EmailSenderError::delivery(std::io::Error::other(err.to_string())))?;
        Ok(sent.clone())
    }
}

#[async_trait]
impl EmailSender for InMemoryOutbox {
    async fn send(
        &self,
        sender: &str,
        recipients: &Recipients,
        email: &RenderedEmail,
    ) -> EmailSenderResult<()> {
        let mut sent = self
            .sent
            .write()
            .map_err(|err| EmailSenderError::delivery(std::io::Error::other(err.to_string())))?;
        sent.push(SentEmail {
            sender: sender.to_owned(),
            recipients: recipients.to_vec(),
            subject: email.subject().to_owned(),
            html_body: email.html_body().to_owned(),
        });
        Ok(())
    }
}
