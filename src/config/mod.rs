//! Configuration management for the removal client
//!
//! This module handles loading, validation, and merging of client configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PortainerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Removal workflow settings
    #[serde(default)]
    pub removal: RemovalConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PortainerError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Reads `PORTAINER_URL`, `PORTAINER_API_KEY`, `PORTAINER_TIMEOUT` and
    /// `PORTAINER_INSECURE`; anything unset keeps its default.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut api = ApiConfig::default();

        if let Some(url) = lookup("PORTAINER_URL") {
            api.base_url = url;
        }
        if let Some(key) = lookup("PORTAINER_API_KEY") {
            api.api_key = Some(key);
        }
        if let Some(timeout) = lookup("PORTAINER_TIMEOUT") {
            api.timeout_seconds = timeout
                .parse()
                .map_err(|e| PortainerError::Config(format!("Invalid timeout: {}", e)))?;
        }
        if let Some(insecure) = lookup("PORTAINER_INSECURE") {
            api.accept_invalid_certs = insecure
                .parse()
                .map_err(|e| PortainerError::Config(format!("Invalid insecure flag: {}", e)))?;
        }

        Ok(Self {
            api,
            removal: RemovalConfig::default(),
        })
    }

    /// Get API configuration
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Get removal configuration
    pub fn removal(&self) -> &RemovalConfig {
        &self.removal
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.api
            .validate()
            .map_err(|e| PortainerError::Config(format!("API config error: {}", e)))?;

        self.removal
            .validate()
            .map_err(|e| PortainerError::Config(format!("Removal config error: {}", e)))?;

        Ok(())
    }
}
