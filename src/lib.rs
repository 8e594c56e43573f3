//! Async client for the EchoIntel analytics API.
//!
//! [`EchoIntelClient`] exposes every remote operation as a typed method.
//! Requests go through an [`Execute`](http::Execute) implementation that
//! enforces a per-attempt deadline, retries transient failures and maps HTTP
//! failures onto [`EchoIntelError`].

pub mod client;
pub mod commands;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod types;

pub use client::EchoIntelClient;
pub use config::{ClientConfig, ResolvedConfig, RetryConfig};
pub use endpoints::{AuthTier, Operation};
pub use error::{ConfigError, EchoIntelError, ErrorKind};
pub use http::RetryPolicy;
