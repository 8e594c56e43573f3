//! HTTP execution layer: request data, retry policy and error mapping.

mod client;
pub mod request;
mod retry;

#[cfg(test)]
pub use client::MockExecute;
pub use client::{Execute, HttpExecutor};
pub use request::{HttpMethod, HttpRequest};
pub use retry::{
    DEFAULT_ATTEMPTS, DEFAULT_DELAY_MS, RetryPolicy, classify_failure, with_retry,
};
