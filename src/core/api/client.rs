//! Portainer HTTP client

use super::backend::RemovalBackend;
use super::error_body::ErrorFormat;
use crate::config::ApiConfig;
use crate::core::applications::{EnvironmentId, Stack, WorkloadKind};
use crate::utils::error::{PortainerError, Result};
use crate::utils::net::{ClientUtils, HttpClientConfig};
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

const REMOVE_APPLICATION: &str = "Unable to remove application";
const REMOVE_STACK: &str = "Unable to remove stack";

/// Client for the removal endpoints of the management API
#[derive(Debug, Clone)]
pub struct PortainerClient {
    base_url: Url,
    http: Client,
}

impl PortainerClient {
    /// Build a client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = ClientUtils::create_http_client(&HttpClientConfig::from(config))?;
        Self::with_http_client(&config.base_url, http)
    }

    /// Build a client around an existing reqwest client
    pub fn with_http_client(base_url: &str, http: Client) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| PortainerError::config(format!("Invalid API base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(PortainerError::config(format!(
                "API base URL cannot carry paths: {}",
                base_url
            )));
        }

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended with percent-encoded path segments
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                PortainerError::config(format!("API base URL cannot carry paths: {}", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn send_delete(
        &self,
        url: Url,
        query: &[(&str, String)],
        context: &str,
        format: ErrorFormat,
    ) -> Result<()> {
        debug!("DELETE {}", url);

        let response = self
            .http
            .delete(url)
            .query(query)
            .send()
            .await
            .map_err(|e| PortainerError::network(context, e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = format.message(status, &body);
        warn!("{} ({}): {}", context, status, message);

        Err(PortainerError::api(context, status.as_u16(), message))
    }
}

#[async_trait::async_trait]
impl RemovalBackend for PortainerClient {
    async fn delete_workload(
        &self,
        environment_id: EnvironmentId,
        namespace: &str,
        kind: WorkloadKind,
        name: &str,
    ) -> Result<()> {
        let environment = environment_id.to_string();
        let url = self.endpoint(&[
            "endpoints",
            &environment,
            "kubernetes",
            "apis",
            "apps",
            "v1",
            "namespaces",
            namespace,
            kind.collection(),
            name,
        ])?;

        self.send_delete(url, &[], REMOVE_APPLICATION, ErrorFormat::Kubernetes)
            .await
    }

    async fn delete_pod(
        &self,
        environment_id: EnvironmentId,
        namespace: &str,
        name: &str,
    ) -> Result<()> {
        let environment = environment_id.to_string();
        let url = self.endpoint(&[
            "endpoints",
            &environment,
            "kubernetes",
            "api",
            "v1",
            "namespaces",
            namespace,
            "pods",
            name,
        ])?;

        self.send_delete(url, &[], REMOVE_APPLICATION, ErrorFormat::Kubernetes)
            .await
    }

    async fn uninstall_helm_release(
        &self,
        environment_id: EnvironmentId,
        namespace: &str,
        name: &str,
    ) -> Result<()> {
        let environment = environment_id.to_string();
        let url = self.endpoint(&["endpoints", &environment, "kubernetes", "helm", name])?;

        self.send_delete(
            url,
            &[("namespace", namespace.to_string())],
            REMOVE_APPLICATION,
            ErrorFormat::Portainer,
        )
        .await
    }

    async fn delete_stack(&self, environment_id: EnvironmentId, stack: &Stack) -> Result<()> {
        let url = self.endpoint(&["stacks", "name", &stack.name])?;

        self.send_delete(
            url,
            &[
                ("external", "false".to_string()),
                ("name", stack.name.clone()),
                ("endpointId", environment_id.to_string()),
                ("namespace", stack.resource_pool.clone()),
            ],
            REMOVE_STACK,
            ErrorFormat::Portainer,
        )
        .await
    }
}
