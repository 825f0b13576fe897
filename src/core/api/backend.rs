//! Removal backend trait

use crate::core::applications::{EnvironmentId, Stack, WorkloadKind};
use crate::utils::error::Result;

/// Remote operations the removal workflow depends on
#[async_trait::async_trait]
pub trait RemovalBackend: Send + Sync + std::fmt::Debug {
    /// Delete an apps/v1 workload through the Kubernetes proxy
    async fn delete_workload(
        &self,
        environment_id: EnvironmentId,
        namespace: &str,
        kind: WorkloadKind,
        name: &str,
    ) -> Result<()>;

    /// Delete a bare pod through the Kubernetes proxy
    async fn delete_pod(&self, environment_id: EnvironmentId, namespace: &str, name: &str)
    -> Result<()>;

    /// Uninstall a Helm release
    async fn uninstall_helm_release(
        &self,
        environment_id: EnvironmentId,
        namespace: &str,
        name: &str,
    ) -> Result<()>;

    /// Delete a stack by name
    async fn delete_stack(&self, environment_id: EnvironmentId, stack: &Stack) -> Result<()>;
}
