//! Task repository backed by a Notion database query.

use super::{
    DEFAULT_FILTER_PROPERTIES, TaskSchema, map_query_response, parse_filter_properties,
    pending_tasks_payload, query::query_path,
};
use crate::task::{
    domain::TaskRecord,
    ports::{NotionApi, NotionError, TaskRepository, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Reads pending tasks from one Notion database.
#[derive(Clone)]
pub struct NotionTaskRepository<A, C>
where
    A: NotionApi,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    clock: Arc<C>,
    database_id: String,
    filter_properties: Vec<String>,
    schema: TaskSchema,
}

impl<A, C> NotionTaskRepository<A, C>
where
    A: NotionApi,
    C: Clock + Send + Sync,
{
    /// Creates a repository for `database_id` requesting the default
    /// property projection.
    #[must_use]
    pub fn new(api: Arc<A>, clock: Arc<C>, database_id: impl Into<String>) -> Self {
        Self {
            api,
            clock,
            database_id: database_id.into(),
            filter_properties: parse_filter_properties(DEFAULT_FILTER_PROPERTIES),
            schema: TaskSchema::default(),
        }
    }

    /// Replaces the projection with a comma-separated property list.
    #[must_use]
    pub fn with_filter_properties(mut self, filter_properties: &str) -> Self {
        self.filter_properties = parse_filter_properties(filter_properties);
        self
    }

    /// Overrides the database property names.
    #[must_use]
    pub fn with_schema(mut self, schema: TaskSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Returns the properties requested from the API.
    #[must_use]
    pub fn filter_properties(&self) -> &[String] {
        &self.filter_properties
    }

    /// Returns the query path including the projection parameters.
    #[must_use]
    pub fn query_path(&self) -> String {
        query_path(&self.database_id, &self.filter_properties)
    }

    /// Builds the query body for the current local date.
    #[must_use]
    pub fn pending_tasks_payload(&self) -> Value {
        pending_tasks_payload(&self.schema, self.today())
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

#[async_trait]
impl<A, C> TaskRepository for NotionTaskRepository<A, C>
where
    A: NotionApi,
    C: Clock + Send + Sync,
{
    async fn get_pending_tasks(&self) -> TaskRepositoryResult<Vec<TaskRecord>> {
        info!(database_id = %self.database_id, "fetching pending tasks from Notion");
        let path = self.query_path();
        let payload = self.pending_tasks_payload();
        debug!(%path, "querying task database");

        let response = self.api.post(&path, &payload).await?;
        let tasks = map_query_response(response, &self.schema)?;
        if tasks.is_empty() {
            return Err(NotionError::data_not_found("No tasks found in Notion"));
        }

        info!(count = tasks.len(), "mapped pending tasks");
        Ok(tasks)
    }
}
