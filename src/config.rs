//! Client configuration: raw user input and its resolved, validated form.

use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::endpoints::BASE_URL;
use crate::error::ConfigError;
use crate::http::{DEFAULT_ATTEMPTS, DEFAULT_DELAY_MS, RetryPolicy};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_API_URL: &str = "ECHOINTEL_API_URL";
pub const ENV_CUSTOMER_API_ID: &str = "ECHOINTEL_CUSTOMER_API_ID";
pub const ENV_SECRET: &str = "ECHOINTEL_SECRET";
pub const ENV_ADMIN_SECRET: &str = "ECHOINTEL_ADMIN_SECRET";
pub const ENV_TIMEOUT_MS: &str = "ECHOINTEL_TIMEOUT_MS";
pub const ENV_RETRY_ATTEMPTS: &str = "ECHOINTEL_RETRY_ATTEMPTS";
pub const ENV_RETRY_DELAY_MS: &str = "ECHOINTEL_RETRY_DELAY_MS";

/// Retry settings as supplied by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    #[serde(default, rename = "delay", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

/// Client configuration as supplied by the user.
///
/// Field names follow the JSON shape used by the other EchoIntel SDKs
/// (`apiUrl`, `customerApiId`, `timeout`, `retry.delay`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default)]
    pub customer_api_id: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_secret: Option<String>,
    #[serde(default, rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryConfig>,
}

impl ClientConfig {
    pub fn new(customer_api_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            customer_api_id: customer_api_id.into(),
            secret: secret.into(),
            ..Self::default()
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_admin_secret(mut self, admin_secret: impl Into<String>) -> Self {
        self.admin_secret = Some(admin_secret.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_retry(mut self, attempts: u32, delay_ms: u64) -> Self {
        self.retry = Some(RetryConfig {
            attempts: Some(attempts),
            delay_ms: Some(delay_ms),
        });
        self
    }

    /// Reads configuration from `ECHOINTEL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let attempts = var(ENV_RETRY_ATTEMPTS)
            .map(|v| parse_number(ENV_RETRY_ATTEMPTS, &v))
            .transpose()?;
        let delay_ms = var(ENV_RETRY_DELAY_MS)
            .map(|v| parse_number(ENV_RETRY_DELAY_MS, &v))
            .transpose()?;
        let retry = (attempts.is_some() || delay_ms.is_some())
            .then_some(RetryConfig { attempts, delay_ms });

        Ok(Self {
            api_url: var(ENV_API_URL),
            customer_api_id: var(ENV_CUSTOMER_API_ID).unwrap_or_default(),
            secret: var(ENV_SECRET).unwrap_or_default(),
            admin_secret: var(ENV_ADMIN_SECRET),
            timeout_ms: var(ENV_TIMEOUT_MS)
                .map(|v| parse_number(ENV_TIMEOUT_MS, &v))
                .transpose()?,
            retry,
        })
    }

    /// Reads configuration from a JSON file.
    #[tracing::instrument]
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading client configuration from {:?}", path);

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies defaults and validates the configuration.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        if self.customer_api_id.trim().is_empty() {
            return Err(ConfigError::Missing("customer_api_id"));
        }
        if self.secret.trim().is_empty() {
            return Err(ConfigError::Missing("secret"));
        }

        let api_url = match self.api_url {
            Some(url) => {
                let url = url.trim().trim_end_matches('/');
                if url.is_empty() {
                    return Err(ConfigError::Invalid {
                        field: "api_url",
                        reason: "must not be empty".to_string(),
                    });
                }
                url.to_string()
            }
            None => BASE_URL.to_string(),
        };

        let timeout_ms = self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout",
                reason: "must be greater than zero".to_string(),
            });
        }

        let retry = self.retry.unwrap_or_default();
        let attempts = retry.attempts.unwrap_or(DEFAULT_ATTEMPTS);
        if attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "retry.attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        let delay_ms = retry.delay_ms.unwrap_or(DEFAULT_DELAY_MS);

        Ok(ResolvedConfig {
            api_url,
            customer_api_id: self.customer_api_id,
            secret: self.secret,
            admin_secret: self.admin_secret.filter(|s| !s.is_empty()),
            timeout: Duration::from_millis(timeout_ms),
            retry: RetryPolicy::new(attempts, Duration::from_millis(delay_ms)),
        })
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            field,
            reason: format!("'{}' is not a valid number ({})", value, e),
        })
}

/// Configuration with defaults applied. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    api_url: String,
    customer_api_id: String,
    secret: String,
    admin_secret: Option<String>,
    timeout: Duration,
    retry: RetryPolicy,
}

impl ResolvedConfig {
    /// Base URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn customer_api_id(&self) -> &str {
        &self.customer_api_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn admin_secret(&self) -> Option<&str> {
        self.admin_secret.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }
}

// Secrets are never printed.
impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_url", &self.api_url)
            .field("customer_api_id", &self.customer_api_id)
            .field("secret", &"<redacted>")
            .field(
                "admin_secret",
                &self.admin_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish()
    }
}
