//! Validators for the client configuration structures

use super::trait_def::Validate;
use super::url_rules::validate_api_url;
use crate::config::models::*;
use tracing::debug;

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating API configuration");

        validate_api_url(&self.base_url, "API base URL")?;

        if self.timeout_seconds == 0 {
            return Err("API timeout must be greater than 0".to_string());
        }

        if let Some(key) = &self.api_key {
            if key.trim().is_empty() {
                return Err("API key cannot be blank when set".to_string());
            }
        }

        if self.user_agent.is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for RemovalConfig {
    fn validate(&self) -> Result<(), String> {
        if self.concurrency == Some(0) {
            return Err("Removal concurrency must be greater than 0".to_string());
        }
        Ok(())
    }
}
