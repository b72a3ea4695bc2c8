//! Port contracts for pending task retrieval.
//!
//! Ports define infrastructure-agnostic interfaces used by the digest
//! service and implemented by adapters.

mod error;
pub mod notion_api;
pub mod repository;

pub use error::NotionError;
pub use notion_api::NotionApi;
pub use repository::{TaskRepository, TaskRepositoryResult};
