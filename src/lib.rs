//! Notion digest: a daily email of pending Notion tasks.
//!
//! One invocation queries a Notion database for tasks that are not started
//! and due today or earlier, renders them into an HTML email and sends it
//! through Amazon SES.
//!
//! # Architecture
//!
//! Each module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (Notion, SES, memory)
//!
//! # Modules
//!
//! - [`task`]: Pending-task query and mapping from Notion pages
//! - [`email`]: Digest rendering and delivery
//! - [`digest`]: One end-to-end invocation and its response
//! - [`config`]: Environment-driven settings
//! - [`telemetry`]: Tracing set-up

pub mod config;
pub mod digest;
pub mod email;
pub mod task;
pub mod telemetry;

#[cfg(test)]
mod test_support;
