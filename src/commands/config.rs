use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::{
    EchoIntelClient,
    config::{ClientConfig, RetryConfig},
};

/// Connection settings collected from the command line.
///
/// Every field is optional. A config file (if given) supplies the base values
/// and explicit settings override them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub config_file: Option<PathBuf>,
    pub api_url: Option<String>,
    pub customer_api_id: Option<String>,
    pub secret: Option<String>,
    pub admin_secret: Option<String>,
    pub timeout_ms: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
}

impl Settings {
    /// Merges the config file and the explicit settings.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config_file {
            Some(path) => ClientConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config file {:?}", path))?,
            None => ClientConfig::default(),
        };

        if let Some(api_url) = &self.api_url {
            config.api_url = Some(api_url.clone());
        }
        if let Some(id) = &self.customer_api_id {
            config.customer_api_id = id.clone();
        }
        if let Some(secret) = &self.secret {
            config.secret = secret.clone();
        }
        if let Some(admin_secret) = &self.admin_secret {
            config.admin_secret = Some(admin_secret.clone());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = Some(timeout_ms);
        }
        if self.retry_attempts.is_some() || self.retry_delay_ms.is_some() {
            let retry = config.retry.get_or_insert_with(RetryConfig::default);
            if let Some(attempts) = self.retry_attempts {
                retry.attempts = Some(attempts);
            }
            if let Some(delay_ms) = self.retry_delay_ms {
                retry.delay_ms = Some(delay_ms);
            }
        }

        Ok(config)
    }

    pub fn client(&self) -> Result<EchoIntelClient> {
        let config = self.client_config()?;
        let client = EchoIntelClient::new(config).context("Invalid client configuration")?;
        debug!("Using EchoIntel API at {}", client.config().api_url());
        Ok(client)
    }
}
