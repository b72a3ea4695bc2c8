//! Normalized task record passed from the repository to the renderer.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// A pending task as read from the workspace database.
///
/// Records are immutable once built. `due_date` keeps the raw `YYYY-MM-DD`
/// string as received so that presentation code decides how to treat values
/// that do not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    title: String,
    due_date: Option<String>,
    notes: String,
}

/// Parameter object for building a record from mapped API fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecordData {
    /// External task identifier.
    pub id: TaskId,
    /// Task title, possibly empty.
    pub title: String,
    /// Raw due date string, if set.
    pub due_date: Option<String>,
    /// Notes text, possibly empty.
    pub notes: String,
}

impl TaskRecord {
    /// Builds a record from mapped API fields.
    #[must_use]
    pub fn from_data(data: TaskRecordData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            due_date: data.due_date,
            notes: data.notes,
        }
    }

    /// Creates a record with empty notes and no due date.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due_date: None,
            notes: String::new(),
        }
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the notes text.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title. May be empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the due date string, if one is set.
    #[must_use]
    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    /// Returns the notes text. Empty when the task has no notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns `true` when the task carries notes.
    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}
