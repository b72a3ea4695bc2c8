//! Given steps for digest BDD scenarios.

use super::world::DigestWorld;
use super::fixtures::{FixedClock, notion_page};
use notion_digest::task::{adapters::memory::StaticNotionApi, ports::NotionError};
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given("today is {year:i32}-{month:u32}-{day:u32}")]
fn today_is(
    world: &mut DigestWorld,
    year: i32,
    month: u32,
    day: u32,
) -> Result<(), eyre::Report> {
    world.clock = Some(Arc::new(FixedClock::at(year, month, day)?));
    Ok(())
}

#[given(r#"the Notion database holds a task "{title}" due "{due}""#)]
fn task_with_due_date(world: &mut DigestWorld, title: String, due: String) {
    let id = format!("page-{}", world.pages.len() + 1);
    world.pages.push(notion_page(&id, &title, Some(&due), ""));
}

#[given(r#"the Notion database holds a task "{title}" with notes "{notes}""#)]
fn task_with_notes(world: &mut DigestWorld, title: String, notes: String) {
    let id = format!("page-{}", world.pages.len() + 1);
    world.pages.push(notion_page(&id, &title, None, &notes));
}

#[given("the Notion database holds no pending tasks")]
fn no_pending_tasks(world: &mut DigestWorld) {
    world.pages.clear();
}

#[given("the Notion API rejects queries with status {status:u16}")]
fn api_rejects_queries(world: &mut DigestWorld, status: u16) {
    world.api = Some(Arc::new(StaticNotionApi::failing(NotionError::api(
        Some(status),
        "Notion API request failed: unauthorized",
    ))));
}
