//! Service layer running one digest invocation.

use crate::email::{
    domain::Recipients,
    ports::{EmailSender, EmailSenderError},
    render::EmailRenderer,
};
use crate::task::ports::{NotionError, TaskRepository};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Addresses used for every digest email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySettings {
    /// From address.
    pub sender: String,
    /// Destination addresses.
    pub recipients: Recipients,
}

/// Result of a completed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutcome {
    /// The digest was rendered and handed to the transport.
    Sent {
        /// Number of tasks in the digest.
        task_count: usize,
        /// Subject line of the sent email.
        subject: String,
    },
    /// No task was pending, so no email was sent.
    NothingPending,
}

/// Service-level errors for a digest invocation.
#[derive(Debug, Error)]
pub enum DigestError {
    /// Reading tasks failed.
    #[error(transparent)]
    Tasks(#[from] NotionError),
    /// Delivering the email failed.
    #[error(transparent)]
    Email(#[from] EmailSenderError),
}

/// Result type for digest service operations.
pub type DigestResult<T> = Result<T, DigestError>;

/// Runs the repository, renderer and sender in sequence.
#[derive(Clone)]
pub struct DigestService<R, S, C>
where
    R: TaskRepository,
    S: EmailSender,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    sender: Arc<S>,
    renderer: EmailRenderer<C>,
    delivery: DeliverySettings,
}

impl<R, S, C> DigestService<R, S, C>
where
    R: TaskRepository,
    S: EmailSender,
    C: Clock + Send + Sync,
{
    /// Creates a digest service.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        sender: Arc<S>,
        renderer: EmailRenderer<C>,
        delivery: DeliverySettings,
    ) -> Self {
        Self {
            repository,
            sender,
            renderer,
            delivery,
        }
    }

    /// Performs one invocation: query, render, send.
    ///
    /// Returns [`DigestOutcome::NothingPending`] when the repository reports
    /// that no task matched.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Tasks`] for any other repository failure and
    /// [`DigestError::Email`] when delivery fails.
    pub async fn run(&self) -> DigestResult<DigestOutcome> {
        let tasks = match self.repository.get_pending_tasks().await {
            Ok(tasks) => tasks,
            Err(err) if err.is_data_not_found() => {
                info!(reason = %err, "no pending tasks, skipping email");
                return Ok(DigestOutcome::NothingPending);
            }
            Err(err) => return Err(err.into()),
        };

        let email = self.renderer.render(&tasks);
        self.sender
            .send(&self.delivery.sender, &self.delivery.recipients, &email)
            .await?;

        info!(task_count = tasks.len(), subject = email.subject(), "digest delivered");
        Ok(DigestOutcome::Sent {
            task_count: tasks.len(),
            subject: email.subject().to_owned(),
        })
    }
}
