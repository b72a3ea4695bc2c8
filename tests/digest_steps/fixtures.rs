//! Test doubles shared by digest steps.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use eyre::OptionExt;
use mockable::Clock;
use serde_json::{Value, json};

/// Clock frozen at local noon on a given day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Freezes the clock at noon local time on `year-month-day`.
    pub fn at(year: i32, month: u32, day: u32) -> eyre::Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .ok_or_eyre("invalid calendar date")?;
        let now = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_eyre("noon does not exist in the local time zone")?;
        Ok(Self { now })
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

/// Builds a Notion page using the default `Tarea`/`Fecha`/`Notas` schema.
pub fn notion_page(id: &str, title: &str, due: Option<&str>, notes: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Tarea": { "type": "title", "title": [{ "plain_text": title }] },
            "Fecha": { "type": "date", "date": due.map(|start| json!({ "start": start })) },
            "Notas": { "type": "rich_text", "rich_text": [{ "plain_text": notes }] },
        }
    })
}
