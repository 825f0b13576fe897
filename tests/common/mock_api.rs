//! Mock Portainer API built on wiremock

use portainer_app_removal::{ApiConfig, PortainerClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "ptr_test_key";

/// A wiremock server answering under `/api`
pub struct MockPortainer {
    pub server: MockServer,
}

impl MockPortainer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url()).with_api_key(API_KEY)
    }

    pub fn client(&self) -> PortainerClient {
        PortainerClient::new(&self.api_config()).expect("client builds")
    }

    pub fn workload_path(env: u32, namespace: &str, collection: &str, name: &str) -> String {
        format!(
            "/api/endpoints/{}/kubernetes/apis/apps/v1/namespaces/{}/{}/{}",
            env, namespace, collection, name
        )
    }

    pub fn pod_path(env: u32, namespace: &str, name: &str) -> String {
        format!(
            "/api/endpoints/{}/kubernetes/api/v1/namespaces/{}/pods/{}",
            env, namespace, name
        )
    }

    pub fn helm_path(env: u32, name: &str) -> String {
        format!("/api/endpoints/{}/kubernetes/helm/{}", env, name)
    }

    pub fn stack_path(name: &str) -> String {
        format!("/api/stacks/name/{}", name)
    }

    /// Answer DELETE on `route` with `status`, expecting exactly `times` calls
    pub async fn expect_delete(&self, route: &str, status: u16, times: u64) {
        Mock::given(method("DELETE"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Answer DELETE on `route` with a Kubernetes Status failure
    pub async fn kubernetes_failure(&self, route: &str, status: u16, message: &str) {
        Mock::given(method("DELETE"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "kind": "Status",
                "apiVersion": "v1",
                "status": "Failure",
                "message": message,
                "code": status
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer DELETE on `route` with a Portainer error body
    pub async fn portainer_failure(&self, route: &str, status: u16, message: &str, details: &str) {
        Mock::given(method("DELETE"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": message,
                "details": details
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Accept the stack DELETE with the fixed query the console sends
    pub async fn expect_stack_delete(&self, name: &str, env: u32, namespace: &str, times: u64) {
        Mock::given(method("DELETE"))
            .and(path(Self::stack_path(name)))
            .and(query_param("external", "false"))
            .and(query_param("name", name))
            .and(query_param("endpointId", env.to_string()))
            .and(query_param("namespace", namespace))
            .respond_with(ResponseTemplate::new(204))
            .expect(times)
            .mount(&self.server)
            .await;
    }
}
