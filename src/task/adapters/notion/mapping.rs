//! Mapping of Notion query responses into task records.

use super::TaskSchema;
use crate::task::{
    domain::{TaskId, TaskRecord, TaskRecordData},
    ports::{NotionError, TaskRepositoryResult},
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// A database page as returned by the query endpoint.
#[derive(Debug, Deserialize)]
struct Page {
    id: String,
    #[serde(default)]
    properties: HashMap<String, PropertyValue>,
}

/// The subset of a property value the digest reads. Other property kinds
/// deserialize to the empty default.
#[derive(Debug, Default, Deserialize)]
struct PropertyValue {
    #[serde(default)]
    title: Vec<RichTextSegment>,
    #[serde(default)]
    rich_text: Vec<RichTextSegment>,
    #[serde(default)]
    date: Option<DateValue>,
}

#[derive(Debug, Deserialize)]
struct RichTextSegment {
    #[serde(default)]
    plain_text: String,
}

#[derive(Debug, Deserialize)]
struct DateValue {
    #[serde(default)]
    start: Option<String>,
}

/// Maps every entry of `results` into a [`TaskRecord`], preserving order.
///
/// A missing or null `results` field yields an empty list.
///
/// # Errors
///
/// Returns [`NotionError::MalformedResponse`] when `results` is not a list
/// or an entry does not have the expected page shape.
pub fn map_query_response(
    mut response: Value,
    schema: &TaskSchema,
) -> TaskRepositoryResult<Vec<TaskRecord>> {
    let results = match response.get_mut("results").map(Value::take) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(results)) => results,
        Some(other) => {
            return Err(NotionError::malformed(format!(
                "expected `results` to be a list, found {other}"
            )));
        }
    };

    results
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let page: Page = serde_json::from_value(entry).map_err(|err| {
                NotionError::malformed(format!("result {index} is not a page: {err}"))
            })?;
            Ok(map_page(page, schema))
        })
        .collect()
}

fn map_page(mut page: Page, schema: &TaskSchema) -> TaskRecord {
    let title = page
        .properties
        .remove(&schema.title_property)
        .and_then(|property| property.title.into_iter().next())
        .map(|segment| segment.plain_text)
        .unwrap_or_default();
    let due_date = page
        .properties
        .remove(&schema.date_property)
        .and_then(|property| property.date)
        .and_then(|date| date.start);
    let notes = page
        .properties
        .remove(&schema.notes_property)
        .map(|property| {
            property
                .rich_text
                .into_iter()
                .map(|segment| segment.plain_text)
                .collect::<String>()
        })
        .unwrap_or_default();

    TaskRecord::from_data(TaskRecordData {
        id: TaskId::new(page.id),
        title,
        due_date,
        notes,
    })
}
