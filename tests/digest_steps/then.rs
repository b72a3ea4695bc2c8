//! Then steps for digest BDD scenarios.

use super::world::{DigestWorld, ENVIRONMENT};
use eyre::WrapErr;
use notion_digest::{
    digest::{DigestOutcome, InvocationResponse},
    email::adapters::memory::SentEmail,
};
use rstest_bdd_macros::then;

fn only_email(world: &DigestWorld) -> Result<SentEmail, eyre::Report> {
    let mut sent = world.outbox.sent().wrap_err("read outbox")?;
    if sent.len() != 1 {
        return Err(eyre::eyre!("expected one email, found {}", sent.len()));
    }
    sent.pop().ok_or_else(|| eyre::eyre!("outbox is empty"))
}

fn outcome(world: &DigestWorld) -> Result<&DigestOutcome, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("digest has not run"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("digest failed unexpectedly: {err}"))
}

#[then(r#"one email is sent with subject "{subject}""#)]
fn one_email_with_subject(world: &DigestWorld, subject: String) -> Result<(), eyre::Report> {
    let email = only_email(world)?;
    if email.subject != subject {
        return Err(eyre::eyre!("expected subject {subject:?}, found {:?}", email.subject));
    }
    if email.recipients != ["me@example.com"] {
        return Err(eyre::eyre!("unexpected recipients {:?}", email.recipients));
    }
    match outcome(world)? {
        DigestOutcome::Sent { task_count: 2, .. } => Ok(()),
        other => Err(eyre::eyre!("unexpected outcome {other:?}")),
    }
}

#[then(r#"the email lists "{first}" before "{second}""#)]
fn email_lists_in_order(
    world: &DigestWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let body = only_email(world)?.html_body;
    let first_at = body
        .find(&first)
        .ok_or_else(|| eyre::eyre!("{first:?} missing from body"))?;
    let second_at = body
        .find(&second)
        .ok_or_else(|| eyre::eyre!("{second:?} missing from body"))?;
    if first_at >= second_at {
        return Err(eyre::eyre!("{first:?} should appear before {second:?}"));
    }
    Ok(())
}

#[then(r#"the email shows the due date "{badge}""#)]
fn email_shows_due_date(world: &DigestWorld, badge: String) -> Result<(), eyre::Report> {
    let body = only_email(world)?.html_body;
    if !body.contains(&format!(r#"<span class="date-pill">{badge}</span>"#)) {
        return Err(eyre::eyre!("badge {badge:?} missing from body"));
    }
    Ok(())
}

#[then(r#"the email links "{href}""#)]
fn email_links(world: &DigestWorld, href: String) -> Result<(), eyre::Report> {
    let body = only_email(world)?.html_body;
    if !body.contains(&format!(r#"<a href="{href}""#)) {
        return Err(eyre::eyre!("link to {href:?} missing from body"));
    }
    Ok(())
}

#[then(r#"the Notion query asked for tasks due on or before "{date}""#)]
fn query_used_today(world: &DigestWorld, date: String) -> Result<(), eyre::Report> {
    let api = world
        .api
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no Notion stand-in recorded"))?;
    let requests = api.requests().wrap_err("read recorded requests")?;
    let request = requests
        .first()
        .ok_or_else(|| eyre::eyre!("no Notion request was made"))?;
    let filters = request.payload["filter"]["and"]
        .as_array()
        .ok_or_else(|| eyre::eyre!("payload has no compound filter"))?;
    let bound = filters
        .iter()
        .find_map(|clause| clause["date"]["on_or_before"].as_str())
        .ok_or_else(|| eyre::eyre!("payload has no date bound"))?;
    if bound != date {
        return Err(eyre::eyre!("expected date bound {date}, found {bound}"));
    }
    Ok(())
}

#[then("no email is sent")]
fn no_email_sent(world: &DigestWorld) -> Result<(), eyre::Report> {
    let sent = world.outbox.sent().wrap_err("read outbox")?;
    if !sent.is_empty() {
        return Err(eyre::eyre!("expected no email, found {}", sent.len()));
    }
    Ok(())
}

#[then(r#"the invocation response says "{message}""#)]
fn invocation_response_says(world: &DigestWorld, message: String) -> Result<(), eyre::Report> {
    let response = InvocationResponse::from_outcome(outcome(world)?, ENVIRONMENT);
    if response.status_code != 200 || response.body.message != message {
        return Err(eyre::eyre!("unexpected response {response:?}"));
    }
    Ok(())
}

#[then(r#"the run fails with "{message}""#)]
fn run_fails_with(world: &DigestWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("digest has not run"))?;
    match result {
        Err(err) if err.to_string() == message => Ok(()),
        Err(err) => Err(eyre::eyre!("expected {message:?}, found {:?}", err.to_string())),
        Ok(outcome) => Err(eyre::eyre!("expected failure, found {outcome:?}")),
    }
}
