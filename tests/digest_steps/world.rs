//! Shared world state for digest BDD scenarios.

use std::sync::Arc;

use super::fixtures::FixedClock;
use notion_digest::{
    digest::{DeliverySettings, DigestOutcome, DigestResult, DigestService},
    email::{adapters::memory::InMemoryOutbox, domain::Recipients, render::EmailRenderer},
    task::adapters::{memory::StaticNotionApi, notion::NotionTaskRepository},
};
use rstest::fixture;
use serde_json::Value;

/// Service type used by the BDD world.
pub type TestDigestService =
    DigestService<NotionTaskRepository<StaticNotionApi, FixedClock>, InMemoryOutbox, FixedClock>;

/// Environment label reported in invocation responses.
pub const ENVIRONMENT: &str = "TEST";

/// Scenario world for digest behaviour tests.
pub struct DigestWorld {
    pub clock: Option<Arc<FixedClock>>,
    pub pages: Vec<Value>,
    pub api: Option<Arc<StaticNotionApi>>,
    pub outbox: Arc<InMemoryOutbox>,
    pub last_result: Option<DigestResult<DigestOutcome>>,
}

impl DigestWorld {
    /// Creates a world with an empty database and outbox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: None,
            pages: Vec::new(),
            api: None,
            outbox: Arc::new(InMemoryOutbox::new()),
            last_result: None,
        }
    }

    /// Builds a digest service over the scenario's Notion stand-in.
    pub fn service(&self, api: Arc<StaticNotionApi>) -> eyre::Result<TestDigestService> {
        let clock = self
            .clock
            .clone()
            .ok_or_else(|| eyre::eyre!("scenario did not set today's date"))?;
        let recipients = Recipients::parse("me@example.com")?;
        Ok(DigestService::new(
            Arc::new(NotionTaskRepository::new(api, Arc::clone(&clock), "tasks-db")),
            Arc::clone(&self.outbox),
            EmailRenderer::new(clock),
            DeliverySettings {
                sender: "digest@example.com".to_owned(),
                recipients,
            },
        ))
    }
}

impl Default for DigestWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DigestWorld {
    DigestWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
