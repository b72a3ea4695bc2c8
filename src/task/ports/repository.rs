//! Repository port for reading pending tasks.

use super::NotionError;
use crate::task::domain::TaskRecord;
use async_trait::async_trait;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, NotionError>;

/// Read-only source of pending tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns tasks that are not started and due on or before today,
    /// ordered by ascending due date.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::DataNotFound`] when no task matches,
    /// [`NotionError::Api`] when the upstream call fails and
    /// [`NotionError::MalformedResponse`] when the response cannot be mapped.
    async fn get_pending_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>>;
}
