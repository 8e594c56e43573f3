use anyhow::{Context, Result};
use log::debug;
use serde_json::{Value, json};
use std::path::Path;

use crate::{
    EchoIntelClient,
    endpoints::{AuthTier, Operation},
    http::Execute,
};

pub mod config;
pub mod customers;
mod payload;

pub use payload::read_payload;

/// Output format of the segmentation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Localized report (`lang` defaults to `pt`)
    I18n,
    /// Structured JSON report (`lang` defaults to `en`)
    Json,
}

#[tracing::instrument(skip(client))]
pub async fn health<E: Execute>(client: &EchoIntelClient<E>) -> Result<Value> {
    let health = client.health().await.context("Health check failed")?;
    Ok(serde_json::to_value(health)?)
}

/// Runs any catalog operation by name with a JSON payload.
#[tracing::instrument(skip(client))]
pub async fn call<E: Execute>(
    client: &EchoIntelClient<E>,
    operation: &str,
    data: Option<&Path>,
) -> Result<Value> {
    let operation: Operation = operation.parse()?;
    let payload = read_payload(data)?;
    debug!("Calling {} {}", operation.method(), operation.path());

    client
        .invoke::<Value, _>(operation, &payload)
        .await
        .with_context(|| format!("Operation '{}' failed", operation))
}

#[tracing::instrument(skip(client))]
pub async fn report<E: Execute>(
    client: &EchoIntelClient<E>,
    format: ReportFormat,
    lang: Option<&str>,
    data: Option<&Path>,
) -> Result<Value> {
    let payload = read_payload(data)?;
    let report = match format {
        ReportFormat::I18n => client.segmentation_report_i18n(&payload, lang).await?,
        ReportFormat::Json => client.segmentation_report_json(&payload, lang).await?,
    };
    Ok(Value::Object(report))
}

/// Lists the operation catalog.
pub fn operations() -> Value {
    Value::Array(
        Operation::ALL
            .iter()
            .map(|op| {
                json!({
                    "name": op.name(),
                    "method": op.method().as_str(),
                    "path": op.path(),
                    "authenticated": op.tier() == AuthTier::Customer,
                })
            })
            .collect(),
    )
}
