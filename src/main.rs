//! Entry point for the pending-task digest.
//!
//! Inside AWS Lambda (detected through `AWS_LAMBDA_FUNCTION_NAME`) the
//! binary serves invocations through the Lambda runtime; any event payload
//! triggers one digest run. Elsewhere it performs a single run and exits,
//! which suits cron jobs and local testing.

use eyre::WrapErr;
use lambda_runtime::{LambdaEvent, service_fn};
use mockable::DefaultClock;
use notion_digest::{
    config::DigestConfig,
    digest::{DigestOutcome, DigestService, InvocationResponse},
    email::{adapters::ses::SesEmailSender, render::EmailRenderer},
    task::adapters::{http::NotionHttpClient, notion::NotionTaskRepository},
    telemetry,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

type Service = DigestService<
    NotionTaskRepository<NotionHttpClient, DefaultClock>,
    SesEmailSender,
    DefaultClock,
>;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = DigestConfig::from_env().wrap_err("load configuration")?;
    if !telemetry::init(&config.log_directive(), !config.is_lambda()) {
        warn!("tracing subscriber already installed; keeping the existing one");
    }
    info!(environment = %config.environment, lambda = config.is_lambda(), "starting digest");

    let service = Arc::new(build_service(&config).await?);

    if config.is_lambda() {
        let environment = config.environment.clone();
        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
            let invocation_service = Arc::clone(&service);
            let invocation_environment = environment.clone();
            async move { handle(&invocation_service, &invocation_environment, event).await }
        }))
        .await
        .map_err(eyre::Report::msg)
    } else {
        let outcome = service.run().await.wrap_err("digest run failed")?;
        let response = InvocationResponse::from_outcome(&outcome, &config.environment);
        info!(message = %response.body.message, "digest run finished");
        Ok(())
    }
}

async fn build_service(config: &DigestConfig) -> eyre::Result<Service> {
    let clock = Arc::new(DefaultClock);
    let api = NotionHttpClient::new(&config.notion).wrap_err("build Notion client")?;
    let repository = NotionTaskRepository::new(
        Arc::new(api),
        Arc::clone(&clock),
        config.database_id.clone(),
    )
    .with_filter_properties(&config.filter_properties);
    let sender = SesEmailSender::from_env(config.aws_region.clone()).await;

    Ok(DigestService::new(
        Arc::new(repository),
        Arc::new(sender),
        EmailRenderer::new(clock),
        config.delivery.clone(),
    ))
}

async fn handle(
    service: &Service,
    environment: &str,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    info!(request_id = %event.context.request_id, "received invocation");
    let outcome = service
        .run()
        .await
        .inspect_err(|err| error!(error = %err, "digest invocation failed"))?;
    if let DigestOutcome::Sent { subject, .. } = &outcome {
        info!(%subject, "digest invocation sent email");
    }
    Ok(InvocationResponse::from_outcome(&outcome, environment))
}
