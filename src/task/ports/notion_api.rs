//! Capability port for issuing requests to the Notion API.

use super::NotionError;
use async_trait::async_trait;
use serde_json::Value;

/// Minimal Notion API capability needed by the task repository.
///
/// Implementations send `payload` as JSON to `path`, relative to the API
/// root, and return the decoded JSON response.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// Posts a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Api`] on any non-success HTTP outcome or
    /// connection failure.
    async fn post(&self, path: &str, payload: &Value) -> Result<Value, NotionError>;
}
