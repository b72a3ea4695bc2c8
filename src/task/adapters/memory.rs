//! In-memory Notion API for tests and local dry runs.

use crate::task::ports::{NotionApi, NotionError};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, RwLock};

/// A request captured by [`StaticNotionApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Endpoint path, including query parameters.
    pub path: String,
    /// JSON body sent with the request.
    pub payload: Value,
}

/// Notion API stand-in that answers every request with the same result and
/// records what it was sent.
#[derive(Debug, Clone)]
pub struct StaticNotionApi {
    response: Result<Value, NotionError>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl StaticNotionApi {
    /// Answers every request with `response`.
    #[must_use]
    pub fn responding(response: Value) -> Self {
        Self {
            response: Ok(response),
            requests: Arc::default(),
        }
    }

    /// Fails every request with `error`.
    #[must_use]
    pub fn failing(error: NotionError) -> Self {
        Self {
            response: Err(error),
            requests: Arc::default(),
        }
    }

    /// Returns the requests received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::Api`] when lock acquisition fails.
    pub fn requests(&self) -> Result<Vec<RecordedRequest>, NotionError> {
        let requests = self
            .requests
            .read()
            .map_err(|err| NotionError::api(None, err.to_string()))?;
        Ok(requests.clone())
    }
}

#[async_trait]
impl NotionApi for StaticNotionApi {
    async fn post(&self, path: &str, payload: &Value) -> Result<Value, NotionError> {
        self.requests
            .write()
            .map_err(|err| NotionError::api(None, err.to_string()))?
            .push(RecordedRequest {
                path: path.to_owned(),
                payload: payload.clone(),
            });
        self.response.clone()
    }
}
