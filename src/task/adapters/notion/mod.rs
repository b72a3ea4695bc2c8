//! Notion-backed task repository.
//!
//! The repository pushes filtering and ordering to Notion: a single query
//! asks for not-started tasks due on or before today, sorted by due date, and
//! requests only the properties the digest needs.

mod mapping;
mod query;
mod repository;
mod schema;

pub use mapping::map_query_response;
pub use query::{DEFAULT_FILTER_PROPERTIES, parse_filter_properties, pending_tasks_payload};
pub use repository::NotionTaskRepository;
pub use schema::TaskSchema;
