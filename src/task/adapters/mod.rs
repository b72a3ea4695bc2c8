//! Adapters for the task ports.
//!
//! # Available Adapters
//!
//! - [`notion::NotionTaskRepository`]: builds the pending-task query and
//!   maps Notion pages into [`TaskRecord`](crate::task::domain::TaskRecord)
//!   values
//! - [`http::NotionHttpClient`]: authenticated `reqwest` client for the
//!   Notion REST API
//! - [`memory::StaticNotionApi`]: canned responses for tests and local runs

pub mod http;
pub mod memory;
pub mod notion;
