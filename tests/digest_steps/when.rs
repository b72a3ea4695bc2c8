//! When steps for digest BDD scenarios.

use super::world::{DigestWorld, run_async};
use notion_digest::task::adapters::memory::StaticNotionApi;
use rstest_bdd_macros::when;
use serde_json::json;
use std::sync::Arc;

#[when("the digest runs")]
fn digest_runs(world: &mut DigestWorld) -> Result<(), eyre::Report> {
    let api = world.api.clone().unwrap_or_else(|| {
        Arc::new(StaticNotionApi::responding(
            json!({ "object": "list", "results": world.pages }),
        ))
    });
    world.api = Some(Arc::clone(&api));

    let service = world.service(api)?;
    world.last_result = Some(run_async(service.run()));
    Ok(())
}
