//! End-to-end removal over HTTP

use crate::common::{ApplicationFactory, MockPortainer, StackFactory};
use portainer_app_removal::core::notifications::BufferedNotifier;
use portainer_app_removal::{
    ApplicationRemover, Config, NotificationLevel, QueryCache, QueryKey, RemovalConfig,
    SuccessReporting,
};
use std::sync::Arc;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

const ENV: u32 = 3;

fn remover(api: &MockPortainer, notifier: &BufferedNotifier) -> ApplicationRemover {
    let config = Config {
        api: api.api_config(),
        removal: RemovalConfig::default(),
    };
    ApplicationRemover::from_config(&config)
        .expect("remover builds")
        .with_notifier(Arc::new(notifier.clone()))
}

#[tokio::test]
async fn test_mixed_batch_with_cascade() {
    let api = MockPortainer::start().await;
    api.expect_delete(
        &MockPortainer::workload_path(ENV, "default", "deployments", "web"),
        200,
        1,
    )
    .await;
    api.expect_delete(
        &MockPortainer::workload_path(ENV, "default", "statefulsets", "db"),
        200,
        1,
    )
    .await;
    api.expect_delete(&MockPortainer::helm_path(ENV, "grafana"), 200, 1)
        .await;
    api.expect_stack_delete("shop", ENV, "default", 1).await;

    let notifier = BufferedNotifier::new();
    let remover = remover(&api, &notifier);
    let mut events = remover.cache().subscribe();

    let stacks = vec![StackFactory::with_members("shop", &["web", "db"])];
    let apps = vec![
        ApplicationFactory::deployment("web").in_stack("shop"),
        ApplicationFactory::stateful_set("db").in_stack("shop"),
        ApplicationFactory::helm("grafana"),
    ];

    let report = remover.remove(ENV, apps, &stacks).await;

    assert!(!report.has_failures());
    let removed: Vec<_> = report
        .applications
        .fulfilled
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(removed, vec!["web", "db", "grafana"]);
    assert_eq!(report.stacks.fulfilled.len(), 1);
    assert_eq!(report.stacks.fulfilled[0].name, "shop");

    let notes = notifier.snapshot();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Applications successfully removed");
    assert_eq!(notes[0].detail, "web, db, grafana");
    assert_eq!(notes[1].title, "Stack successfully removed");
    assert_eq!(notes[1].detail, "shop");

    assert_eq!(events.recv().await.unwrap(), QueryKey::Applications(ENV));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_failed_member_keeps_stack() {
    let api = MockPortainer::start().await;
    api.expect_delete(
        &MockPortainer::workload_path(ENV, "default", "deployments", "web"),
        200,
        1,
    )
    .await;
    api.kubernetes_failure(
        &MockPortainer::workload_path(ENV, "default", "deployments", "api"),
        409,
        "operation cannot be fulfilled",
    )
    .await;
    // the stack still has a member, so its endpoint must not be hit
    api.expect_stack_delete("shop", ENV, "default", 0).await;

    let notifier = BufferedNotifier::new();
    let remover = remover(&api, &notifier);

    let stacks = vec![StackFactory::with_members("shop", &["web", "api"])];
    let apps = vec![
        ApplicationFactory::deployment("web").in_stack("shop"),
        ApplicationFactory::deployment("api").in_stack("shop"),
    ];

    let report = remover.remove(ENV, apps, &stacks).await;

    assert_eq!(report.applications.fulfilled.len(), 1);
    assert_eq!(report.applications.rejected.len(), 1);
    assert_eq!(report.applications.rejected[0].item.name, "api");
    assert_eq!(
        report.applications.rejected[0].reason,
        "Unable to remove application: operation cannot be fulfilled"
    );
    assert!(report.stacks.is_empty());

    let notes = notifier.snapshot();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].level, NotificationLevel::Error);
    assert_eq!(notes[0].title, "Failed to remove application 'api'");
    assert_eq!(notes[1].title, "Application successfully removed");
    assert_eq!(notes[1].detail, "web");
}

#[tokio::test]
async fn test_stack_failure_is_reported() {
    let api = MockPortainer::start().await;
    api.expect_delete(&MockPortainer::pod_path(ENV, "default", "worker"), 200, 1)
        .await;
    api.portainer_failure(
        &MockPortainer::stack_path("jobs"),
        500,
        "Unable to remove stack",
        "stack file is missing",
    )
    .await;

    let notifier = BufferedNotifier::new();
    let remover = remover(&api, &notifier);

    let stacks = vec![StackFactory::with_members("jobs", &["worker"])];
    let apps = vec![ApplicationFactory::pod("worker").in_stack("jobs")];

    let report = remover.remove(ENV, apps, &stacks).await;

    assert_eq!(report.applications.fulfilled.len(), 1);
    assert_eq!(report.stacks.rejected.len(), 1);
    assert_eq!(
        report.stacks.rejected[0].reason,
        "Unable to remove stack: stack file is missing"
    );

    let titles: Vec<_> = notifier.snapshot().into_iter().map(|n| n.title).collect();
    assert_eq!(
        titles,
        vec![
            "Failed to remove stack 'jobs'".to_string(),
            "Application successfully removed".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_unrecognized_kind_never_reaches_server() {
    let api = MockPortainer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&api.server)
        .await;

    let notifier = BufferedNotifier::new();
    let remover = remover(&api, &notifier);

    let report = remover
        .remove(ENV, vec![ApplicationFactory::of_kind("cron", "CronJob")], &[])
        .await;

    assert_eq!(report.applications.rejected.len(), 1);
    assert_eq!(
        report.applications.rejected[0].reason,
        "Unknown application type: CronJob"
    );
    assert_eq!(notifier.len(), 1);
}

#[tokio::test]
async fn test_applications_only_reporting() {
    let api = MockPortainer::start().await;
    api.expect_delete(
        &MockPortainer::workload_path(ENV, "default", "daemonsets", "agent"),
        200,
        1,
    )
    .await;
    api.expect_stack_delete("edge", ENV, "default", 1).await;

    let notifier = BufferedNotifier::new();
    let remover = remover(&api, &notifier)
        .with_success_reporting(SuccessReporting::ApplicationsOnly)
        .with_cache(QueryCache::new(4));

    let stacks = vec![StackFactory::with_members("edge", &["agent"])];
    let apps = vec![ApplicationFactory::daemon_set("agent").in_stack("edge")];

    let report = remover.remove(ENV, apps, &stacks).await;

    assert_eq!(report.stacks.fulfilled.len(), 1);
    let notes = notifier.snapshot();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Application successfully removed");
}
