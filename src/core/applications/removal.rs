//! Batch application removal
//!
//! Removes every selected application independently, then removes the stacks
//! that the batch left without members. Failures are reported per item and
//! never abort the batch.

use super::membership::prune_stacks;
use super::types::{Application, ApplicationKind, EnvironmentId, Stack, WorkloadKind};
use crate::config::{Config, SuccessReporting};
use crate::core::api::{PortainerClient, RemovalBackend};
use crate::core::batch::{SettleConfig, Settlement, settle_all_with_summary};
use crate::core::cache::{QueryCache, QueryKey};
use crate::core::notifications::{Notification, Notifier, TracingNotifier, pluralize};
use crate::utils::error::{PortainerError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};

/// Outcome of one removal invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovalReport {
    /// Application round
    pub applications: Settlement<Application>,
    /// Cascaded stack round
    pub stacks: Settlement<Stack>,
}

impl RemovalReport {
    pub fn has_failures(&self) -> bool {
        self.applications.has_failures() || self.stacks.has_failures()
    }
}

/// Runs the two-round removal against a backend
#[derive(Debug, Clone)]
pub struct ApplicationRemover {
    backend: Arc<dyn RemovalBackend>,
    notifier: Arc<dyn Notifier>,
    cache: QueryCache,
    success_reporting: SuccessReporting,
    settle: SettleConfig,
}

impl ApplicationRemover {
    pub fn new(
        backend: Arc<dyn RemovalBackend>,
        notifier: Arc<dyn Notifier>,
        cache: QueryCache,
    ) -> Self {
        Self {
            backend,
            notifier,
            cache,
            success_reporting: SuccessReporting::default(),
            settle: SettleConfig::default(),
        }
    }

    /// HTTP backend, tracing notifications and a fresh cache, all from config
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let backend = Arc::new(PortainerClient::new(config.api())?);
        let remover = Self::new(backend, Arc::new(TracingNotifier), QueryCache::default())
            .with_success_reporting(config.removal().success_reporting);

        Ok(match config.removal().concurrency {
            Some(limit) => remover.with_concurrency(limit),
            None => remover,
        })
    }

    pub fn with_success_reporting(mut self, success_reporting: SuccessReporting) -> Self {
        self.success_reporting = success_reporting;
        self
    }

    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.settle = SettleConfig::new().with_concurrency(limit);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_cache(mut self, cache: QueryCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Remove `applications` from `environment_id` and cascade to emptied stacks.
    ///
    /// `stacks` is the full current stack listing and is not modified. Every
    /// failure ends up in the report; this never returns an error.
    pub async fn remove(
        &self,
        environment_id: EnvironmentId,
        applications: Vec<Application>,
        stacks: &[Stack],
    ) -> RemovalReport {
        let batch_id = uuid::Uuid::new_v4();
        let span = info_span!("remove_applications", environment_id, %batch_id);

        async move {
            info!("Removing {} applications", applications.len());

            let (settled, summary) = settle_all_with_summary(
                applications,
                |app| self.remove_application(environment_id, app),
                &self.settle,
            )
            .await;
            debug!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                elapsed_ms = summary.total_duration.as_millis() as u64,
                "Application round settled"
            );
            let applications = Settlement::from_settled(settled);

            let pruned = prune_stacks(stacks, &applications.fulfilled);
            if !pruned.emptied.is_empty() {
                info!("Removing {} emptied stacks", pruned.emptied.len());
            }

            let (settled, summary) = settle_all_with_summary(
                pruned.emptied,
                |stack| self.remove_stack(environment_id, stack),
                &self.settle,
            )
            .await;
            debug!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "Stack round settled"
            );
            let stacks = Settlement::from_settled(settled);

            let report = RemovalReport {
                applications,
                stacks,
            };
            self.report(&report).await;
            self.cache.invalidate(QueryKey::Applications(environment_id));

            info!(
                removed_applications = report.applications.fulfilled.len(),
                failed_applications = report.applications.rejected.len(),
                removed_stacks = report.stacks.fulfilled.len(),
                failed_stacks = report.stacks.rejected.len(),
                "Removal finished"
            );
            report
        }
        .instrument(span)
        .await
    }

    async fn remove_application(
        &self,
        environment_id: EnvironmentId,
        app: Application,
    ) -> Result<()> {
        debug!(name = %app.name, kind = %app.kind, "Removing application");

        match &app.kind {
            ApplicationKind::Deployment => {
                self.remove_workload(environment_id, &app, WorkloadKind::Deployment)
                    .await
            }
            ApplicationKind::DaemonSet => {
                self.remove_workload(environment_id, &app, WorkloadKind::DaemonSet)
                    .await
            }
            ApplicationKind::StatefulSet => {
                self.remove_workload(environment_id, &app, WorkloadKind::StatefulSet)
                    .await
            }
            ApplicationKind::Pod => {
                self.backend
                    .delete_pod(environment_id, &app.resource_pool, &app.name)
                    .await
            }
            ApplicationKind::Helm => {
                self.backend
                    .uninstall_helm_release(environment_id, &app.resource_pool, &app.name)
                    .await
            }
            ApplicationKind::Unrecognized(tag) => Err(PortainerError::UnsupportedKind(tag.clone())),
        }
    }

    async fn remove_workload(
        &self,
        environment_id: EnvironmentId,
        app: &Application,
        workload: WorkloadKind,
    ) -> Result<()> {
        self.backend
            .delete_workload(environment_id, &app.resource_pool, workload, &app.name)
            .await
    }

    async fn remove_stack(&self, environment_id: EnvironmentId, stack: Stack) -> Result<()> {
        debug!(name = %stack.name, namespace = %stack.resource_pool, "Removing stack");
        self.backend.delete_stack(environment_id, &stack).await
    }

    async fn report(&self, report: &RemovalReport) {
        for rejected in &report.applications.rejected {
            self.send(Notification::error(
                format!("Failed to remove application '{}'", rejected.item.name),
                &rejected.reason,
            ))
            .await;
        }
        for rejected in &report.stacks.rejected {
            self.send(Notification::error(
                format!("Failed to remove stack '{}'", rejected.item.name),
                &rejected.reason,
            ))
            .await;
        }

        let removed_apps = &report.applications.fulfilled;
        if self.success_reporting.applications() && !removed_apps.is_empty() {
            self.send(success_notice(
                "Application",
                removed_apps.iter().map(|a| a.name.as_str()),
            ))
            .await;
        }

        let removed_stacks = &report.stacks.fulfilled;
        if self.success_reporting.stacks() && !removed_stacks.is_empty() {
            self.send(success_notice(
                "Stack",
                removed_stacks.iter().map(|s| s.name.as_str()),
            ))
            .await;
        }
    }

    async fn send(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(&notification).await {
            warn!(
                "Notifier {} dropped '{}': {}",
                self.notifier.name(),
                notification.title,
                e
            );
        }
    }
}

fn success_notice<'a>(word: &str, names: impl Iterator<Item = &'a str>) -> Notification {
    let names: Vec<&str> = names.collect();
    Notification::success(
        format!(
            "{} successfully removed",
            pluralize(names.len() as i64, word)
        ),
        names.join(", "),
    )
}
