//! HTML digest rendering.
//!
//! [`EmailRenderer`] turns an ordered list of tasks into a subject line and
//! an HTML body. All task text is escaped before it reaches the markup, and
//! URLs in notes are turned into links after escaping. Rendering is total:
//! malformed dates and empty inputs degrade to display values, never errors.

mod date;
mod escape;
mod links;
mod template;

pub use date::{INVALID_DATE, NO_DATE, format_due_date};
pub use escape::escape_html;
pub use links::linkify;
pub use template::DEFAULT_TEMPLATE;

#[cfg(test)]
pub(crate) use links::url_regex;

use crate::email::domain::RenderedEmail;
use crate::task::domain::TaskRecord;
use chrono::Datelike;
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Renders pending tasks into the digest email.
#[derive(Clone)]
pub struct EmailRenderer<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    template: String,
}

impl<C> EmailRenderer<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a renderer using [`DEFAULT_TEMPLATE`].
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_template(clock, DEFAULT_TEMPLATE)
    }

    /// Creates a renderer using a custom template.
    ///
    /// The template may use the `{{task_count}}`, `{{item_word}}`,
    /// `{{task_rows}}` and `{{year}}` placeholders.
    #[must_use]
    pub fn with_template(clock: Arc<C>, template: impl Into<String>) -> Self {
        Self {
            clock,
            template: template.into(),
        }
    }

    /// Renders the subject and HTML body for `tasks`, in order.
    #[must_use]
    pub fn render(&self, tasks: &[TaskRecord]) -> RenderedEmail {
        let task_count = tasks.len();
        let word = item_word(task_count);
        let task_count_text = task_count.to_string();
        let year = self.clock.local().year().to_string();
        let task_rows = tasks.iter().map(task_row).collect::<Vec<_>>().join("\n");

        let html_body = template::substitute(
            &self.template,
            &[
                ("task_count", task_count_text.as_str()),
                ("item_word", word),
                ("task_rows", task_rows.as_str()),
                ("year", year.as_str()),
            ],
        );
        debug!(task_count, "rendered digest email");

        RenderedEmail::new(subject(task_count), html_body)
    }
}

/// Returns `"item"` for exactly one task, `"items"` otherwise.
#[must_use]
pub const fn item_word(task_count: usize) -> &'static str {
    if task_count == 1 { "item" } else { "items" }
}

/// Builds the subject line, e.g. `Task List: 3 Items Pending`.
#[must_use]
pub fn subject(task_count: usize) -> String {
    let word = if task_count == 1 { "Item" } else { "Items" };
    format!("Task List: {task_count} {word} Pending")
}

fn task_row(task: &TaskRecord) -> String {
    let date_display = format_due_date(task.due_date());
    let title = escape_html(task.title());
    let notes_html = if task.has_notes() {
        notes_block(task.notes())
    } else {
        String::new()
    };

    format!(
        r#"<tr class="task-row">
                        <td class="date-cell">
                            <span class="date-pill">{date_display}</span>
                        </td>
                        <td>
                            <span class="task-title">{title}</span>{notes_html}
                        </td>
                    </tr>"#
    )
}

fn notes_block(notes: &str) -> String {
    let linked = linkify(&escape_html(notes));
    format!(
        r#"
                            <div class="task-notes">{linked}</div>"#
    )
}
