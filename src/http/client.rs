//! Request executor with deadline enforcement and retry logic.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::request::HttpRequest;
use super::retry::{RetryPolicy, classify_failure, with_retry};
use crate::error::EchoIntelError;

/// Executes API requests and returns the parsed JSON body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Execute: Send + Sync {
    async fn execute(
        &self,
        request: &HttpRequest,
        timeout: Duration,
        policy: &RetryPolicy,
    ) -> Result<Value, EchoIntelError>;
}

/// reqwest-backed executor.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    /// Creates a new executor wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Single attempt without retry.
    ///
    /// The deadline covers sending the request and reading the whole body.
    /// When it fires, the in-flight exchange is dropped.
    async fn execute_once(
        &self,
        request: &HttpRequest,
        timeout: Duration,
    ) -> Result<Value, EchoIntelError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = match tokio::time::timeout(timeout, exchange).await {
            Err(_) => return Err(EchoIntelError::timeout(duration_ms(timeout))),
            Ok(Err(e)) => {
                return Err(EchoIntelError::generic(format!("Failed to send request: {}", e)));
            }
            Ok(Ok(result)) => result,
        };

        if status.is_success() {
            parse_success(status, &body)
        } else {
            Err(classify_failure(status, &body))
        }
    }
}

#[async_trait]
impl Execute for HttpExecutor {
    #[tracing::instrument(skip(self, request, policy), fields(method = %request.method, url = %request.url))]
    async fn execute(
        &self,
        request: &HttpRequest,
        timeout: Duration,
        policy: &RetryPolicy,
    ) -> Result<Value, EchoIntelError> {
        debug!("{} {}...", request.method, request.url);

        let operation_name = format!("{} {}", request.method, request.url);
        with_retry(&operation_name, policy, |_| self.execute_once(request, timeout)).await
    }
}

/// Parses a 2xx body. An empty body (e.g. 204) decodes as `null`.
fn parse_success(status: StatusCode, body: &[u8]) -> Result<Value, EchoIntelError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|e| EchoIntelError::Generic {
        message: format!("Failed to parse JSON response: {}", e),
        status_code: Some(status.as_u16()),
        context: Some(Value::String(String::from_utf8_lossy(body).into_owned())),
    })
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
