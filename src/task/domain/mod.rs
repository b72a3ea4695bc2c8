//! Domain model for pending tasks.
//!
//! A [`TaskRecord`] is the unit exchanged between the repository that reads
//! the workspace database and the renderer that builds the digest email.

mod ids;
mod task;

pub use ids::TaskId;
pub use task::{TaskRecord, TaskRecordData};
