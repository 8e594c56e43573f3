//! Retry policy and HTTP failure classification.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::error::{EchoIntelError, FieldErrors};

/// Default number of attempts per call.
pub const DEFAULT_ATTEMPTS: u32 = 3;

/// Default delay between attempts in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 100;

/// How many times a call is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS, Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

/// Turns a non-success response into a classified error.
///
/// The body is parsed as JSON when possible (an empty object otherwise) and
/// the human message is taken from its `detail` or `message` field.
pub fn classify_failure(status: StatusCode, body: &[u8]) -> EchoIntelError {
    let data: Value = serde_json::from_slice(body).unwrap_or_else(|_| json!({}));
    let code = status.as_u16();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => EchoIntelError::authentication(
            error_message(&data).unwrap_or_else(|| "Authentication failed".to_string()),
            code,
        ),
        StatusCode::UNPROCESSABLE_ENTITY => EchoIntelError::validation(
            error_message(&data).unwrap_or_else(|| "Validation failed".to_string()),
            field_errors(&data),
        ),
        _ => EchoIntelError::http(
            error_message(&data)
                .unwrap_or_else(|| format!("Request failed with status {}", code)),
            code,
            data,
        ),
    }
}

fn error_message(data: &Value) -> Option<String> {
    ["detail", "message"]
        .iter()
        .filter_map(|key| data.get(key))
        .find_map(|value| match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            // FastAPI reports structured details as arrays
            other => Some(other.to_string()),
        })
}

fn field_errors(data: &Value) -> FieldErrors {
    data.get("errors")
        .cloned()
        .and_then(|errors| serde_json::from_value(errors).ok())
        .unwrap_or_default()
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// the policy's attempts are used up. The attempt number (starting at 1) is
/// passed to the operation.
pub async fn with_retry<F, Fut, T>(
    operation_name: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, EchoIntelError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, EchoIntelError>>,
{
    let mut last_error = None;

    for attempt in 1..=policy.attempts {
        match operation(attempt).await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if !e.is_retryable() {
                    debug!("{}: non-retryable error: {}", operation_name, e);
                    return Err(e);
                }

                if attempt < policy.attempts {
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                        operation_name,
                        attempt,
                        policy.attempts,
                        e,
                        policy.delay.as_millis()
                    );
                    tokio::time::sleep(policy.delay).await;
                }
                last_error = Some(e);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| EchoIntelError::generic("Request failed after all retry attempts")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.attempts, 3);
        assert_eq!(policy.delay, Duration::from_millis(100));
    }

    #[test]
    fn test_classify_unauthorized_uses_detail() {
        let err = classify_failure(StatusCode::UNAUTHORIZED, br#"{"detail": "Invalid secret"}"#);
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.message(), "Invalid secret");
    }

    #[test]
    fn test_classify_forbidden_falls_back_to_message_field() {
        let err = classify_failure(StatusCode::FORBIDDEN, br#"{"message": "Route not allowed"}"#);
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.message(), "Route not allowed");
    }

    #[test]
    fn test_classify_forbidden_default_message() {
        let err = classify_failure(StatusCode::FORBIDDEN, b"");
        assert_eq!(err.message(), "Authentication failed");
    }

    #[test]
    fn test_classify_validation_extracts_errors() {
        let err = classify_failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"errors": {"data": ["field required"], "horizon": ["must be positive", "too large"]}}"#,
        );
        assert_eq!(err.message(), "Validation failed");
        match err {
            EchoIntelError::Validation { errors, .. } => {
                assert_eq!(errors["data"], vec!["field required"]);
                assert_eq!(errors["horizon"].len(), 2);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_validation_without_errors_field() {
        let err = classify_failure(StatusCode::UNPROCESSABLE_ENTITY, br#"{"detail": "bad"}"#);
        match err {
            EchoIntelError::Validation { message, errors } => {
                assert_eq!(message, "bad");
                assert!(errors.is_empty());
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_structured_detail_is_rendered() {
        let err = classify_failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#,
        );
        assert!(err.message().contains("field required"));
    }

    #[test]
    fn test_classify_server_error_keeps_body_as_context() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, br#"{"upstream": "down"}"#);
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.message(), "Request failed with status 502");
        assert_eq!(err.context(), Some(&json!({"upstream": "down"})));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_classify_non_json_body_uses_empty_object() {
        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(err.message(), "Request failed with status 500");
        assert_eq!(err.context(), Some(&json!({})));
    }

    #[test]
    fn test_classify_not_found_is_generic() {
        let err = classify_failure(StatusCode::NOT_FOUND, br#"{"detail": "Not Found"}"#);
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.message(), "Not Found");
    }

    #[tokio::test]
    async fn test_with_retry_success() {
        let result = with_retry("test", &RetryPolicy::default(), |_| async {
            Ok::<_, EchoIntelError>("success")
        })
        .await;
        assert_eq!(result.unwrap(), "success");
    }

    #[tokio::test]
    async fn test_with_retry_immediate_failure_on_non_retryable() {
        let call_count = Arc::new(AtomicU32::new(0));
        let call_count_clone = call_count.clone();

        let result = with_retry("test", &RetryPolicy::default(), |_| {
            let count = call_count_clone.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(EchoIntelError::authentication("denied", 401))
            }
        })
        .await;

        assert_eq!(result.unwrap_err().kind(), ErrorKind::Authentication);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_with_retry_timeout_is_not_retried() {
        let call_count = Arc::new(AtomicU32::new(0));
        let call_count_clone = call_count.clone();

        let result = with_retry("test", &RetryPolicy::default(), |_| {
            let count = call_count_clone.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(EchoIntelError::timeout(50))
            }
        })
        .await;

        assert_eq!(result.unwrap_err().kind(), ErrorKind::Timeout);
        assert_eq!(call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_with_retry_retries_generic_errors() {
        let policy = RetryPolicy::new(3, Duration::from_millis(20));
        let started = Instant::now();

        let result = with_retry("test", &policy, |attempt| async move {
            if attempt < 3 {
                Err(EchoIntelError::generic("connection reset"))
            } else {
                Ok(attempt)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_with_retry_exhausts_attempts_and_returns_last_error() {
        let policy = RetryPolicy::new(4, Duration::ZERO);
        let call_count = Arc::new(AtomicU32::new(0));
        let call_count_clone = call_count.clone();

        let result = with_retry("test", &policy, |attempt| {
            let count = call_count_clone.clone();
            async move {
                count.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(EchoIntelError::generic(format!("failure {}", attempt)))
            }
        })
        .await;

        assert_eq!(result.unwrap_err().message(), "failure 4");
        assert_eq!(call_count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_with_retry_zero_attempts() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        let result = with_retry("test", &policy, |_| async { Ok::<_, EchoIntelError>(()) }).await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.message(), "Request failed after all retry attempts");
    }
}
