//! Query construction for the pending-task lookup.

use super::TaskSchema;
use chrono::NaiveDate;
use serde_json::{Value, json};

/// Projection requested when no explicit property list is configured.
pub const DEFAULT_FILTER_PROPERTIES: &str = "Fecha,Tarea,Notas";

/// Splits a comma-separated property list, trimming entries and dropping
/// blanks.
#[must_use]
pub fn parse_filter_properties(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Builds the query body: status equals the pending value AND date on or
/// before `today`, sorted ascending by date.
#[must_use]
pub fn pending_tasks_payload(schema: &TaskSchema, today: NaiveDate) -> Value {
    json!({
        "filter": {
            "and": [
                {
                    "property": schema.status_property,
                    "status": { "equals": schema.pending_status },
                },
                {
                    "property": schema.date_property,
                    "date": { "on_or_before": today.format("%Y-%m-%d").to_string() },
                },
            ]
        },
        "sorts": [
            { "property": schema.date_property, "direction": "ascending" }
        ],
    })
}

/// Builds the database query path with one `filter_properties` parameter per
/// projected property.
pub(super) fn query_path(database_id: &str, filter_properties: &[String]) -> String {
    let base = format!("databases/{database_id}/query");
    if filter_properties.is_empty() {
        return base;
    }
    let params = filter_properties
        .iter()
        .map(|name| format!("filter_properties={}", urlencoding::encode(name)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{params}")
}
