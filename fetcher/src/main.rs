use anyhow::Result;
use chrono::{Timelike, Utc};
use lambda_runtime::{Error as LambdaError, LambdaEvent, service_fn};
use reqwest::Client as HTTPClient;
use serde_json::Value;
use std::time::Duration;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::job::Cycle;
use crate::publisher::{AnyPublisher, Publisher};
use crate::schedule::{Invocation, job_for_hour};
mod airly;
mod config;
mod job;
mod logging;
mod publisher;
mod schedule;
mod sensor;

#[instrument(skip(http_client, config, publisher, event))]
async fn lambda_handler(
    http_client: &HTTPClient,
    config: &Config,
    publisher: &AnyPublisher,
    event: LambdaEvent<Value>,
) -> Result<Value, LambdaError> {
    let hour = Utc::now().with_timezone(&config.timezone).hour();
    let invocation: Invocation = serde_json::from_value(event.payload).unwrap_or_else(|err| {
        logging::Logger::new()
            .error_text(err.to_string())
            .warn("invocation.ignored", "Ignoring unreadable invocation payload");
        Invocation::default()
    });
    let job = invocation
        .job
        .or_else(|| job_for_hour(hour, config.emergency_checks));

    let report = Cycle {
        http_client,
        config,
        publisher,
    }
    .run(job, hour)
    .await?;
    Ok(serde_json::to_value(report)?)
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // Enable log level filtering via `RUST_LOG` env var
        .json()
        .with_current_span(false) // Optional: Exclude span information
        .with_span_list(false) // Optional: Exclude span list
        .with_target(false) // Optional: Exclude target (module path)
        .without_time()
        .init();

    let config = Config::from_env()?;
    let http_client = HTTPClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let publisher = AnyPublisher::from_config(&http_client, config.telegram.as_ref());
    logging::Logger::new()
        .mode(config.advisory.mode.as_str())
        .info("startup", &format!("Publishing via {}", publisher.name()));

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| async {
        lambda_handler(&http_client, &config, &publisher, event).await
    }))
    .await?;
    Ok(())
}
