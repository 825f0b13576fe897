use crate::config::ApiConfig;
use crate::utils::error::{PortainerError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::collections::HashMap;
use std::time::Duration;

/// Header carrying Portainer access tokens
pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub accept_invalid_certs: bool,
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: crate::config::default_user_agent(),
            accept_invalid_certs: false,
            default_headers: HashMap::new(),
        }
    }
}

impl From<&ApiConfig> for HttpClientConfig {
    fn from(api: &ApiConfig) -> Self {
        let mut default_headers = HashMap::new();
        if let Some(key) = &api.api_key {
            default_headers.insert(API_KEY_HEADER.to_string(), key.clone());
        }

        Self {
            timeout: Duration::from_secs(api.timeout_seconds),
            user_agent: api.user_agent.clone(),
            accept_invalid_certs: api.accept_invalid_certs,
            default_headers,
        }
    }
}

pub struct ClientUtils;

impl ClientUtils {
    pub fn create_http_client(config: &HttpClientConfig) -> Result<Client> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                PortainerError::Config(format!("Invalid header name '{}': {}", key, e))
            })?;
            let mut value = HeaderValue::from_str(value).map_err(|e| {
                PortainerError::Config(format!("Invalid header value for '{}': {}", key, e))
            })?;
            if name.as_str().eq_ignore_ascii_case(API_KEY_HEADER) {
                value.set_sensitive(true);
            }
            headers.insert(name, value);
        }

        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(headers)
            .build()?;
        Ok(client)
    }
}
