//! Error taxonomy for EchoIntel API calls.
//!
//! Every failed call produces exactly one [`EchoIntelError`]. Authentication,
//! validation and timeout failures are terminal; generic failures are retried
//! by the executor until the retry policy is exhausted.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// HTTP status reported by [`EchoIntelError::Timeout`].
pub const TIMEOUT_STATUS: u16 = 408;

/// Per-field validation messages returned with a 422 response.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Coarse classification of an [`EchoIntelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Validation,
    Timeout,
    Generic,
}

/// A classified failure of a remote call.
#[derive(Debug, Error)]
pub enum EchoIntelError {
    /// Credentials were rejected (HTTP 401 or 403).
    #[error("{message}")]
    Authentication { message: String, status_code: u16 },

    /// The payload was rejected (HTTP 422).
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    /// The deadline elapsed before a response arrived.
    #[error("{message}")]
    Timeout { message: String, timeout_ms: u64 },

    /// Any other failure: non-2xx statuses, transport errors, malformed bodies.
    #[error("{message}")]
    Generic {
        message: String,
        status_code: Option<u16>,
        context: Option<Value>,
    },
}

impl EchoIntelError {
    pub fn authentication(message: impl Into<String>, status_code: u16) -> Self {
        Self::Authentication {
            message: message.into(),
            status_code,
        }
    }

    pub fn validation(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout {
            message: format!("Request timed out after {}ms", timeout_ms),
            timeout_ms,
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
            status_code: None,
            context: None,
        }
    }

    pub fn http(message: impl Into<String>, status_code: u16, context: Value) -> Self {
        Self::Generic {
            message: message.into(),
            status_code: Some(status_code),
            context: Some(context),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Generic { .. } => ErrorKind::Generic,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::Validation { message, .. }
            | Self::Timeout { message, .. }
            | Self::Generic { message, .. } => message,
        }
    }

    /// HTTP status associated with the failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { status_code, .. } => Some(*status_code),
            Self::Validation { .. } => Some(422),
            Self::Timeout { .. } => Some(TIMEOUT_STATUS),
            Self::Generic { status_code, .. } => *status_code,
        }
    }

    /// Raw response body (or other diagnostic payload) attached to the error.
    pub fn context(&self) -> Option<&Value> {
        match self {
            Self::Generic { context, .. } => context.as_ref(),
            _ => None,
        }
    }

    /// Only generic failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Generic { .. })
    }
}

/// Errors raised while resolving client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to read configuration file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}
