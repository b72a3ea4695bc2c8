//! Property names of the task database.

/// Names of the Notion database properties read by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSchema {
    /// Status property used in the pending filter.
    pub status_property: String,
    /// Status value that marks a task as pending.
    pub pending_status: String,
    /// Date property used for filtering, sorting and the due date.
    pub date_property: String,
    /// Title property holding the task name.
    pub title_property: String,
    /// Rich-text property holding the task notes.
    pub notes_property: String,
}

impl Default for TaskSchema {
    fn default() -> Self {
        Self {
            status_property: "Status".to_owned(),
            pending_status: "Not Started".to_owned(),
            date_property: "Fecha".to_owned(),
            title_property: "Tarea".to_owned(),
            notes_property: "Notas".to_owned(),
        }
    }
}
