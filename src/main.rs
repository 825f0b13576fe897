//! remove-apps - batch removal of Kubernetes applications
//!
//! Reads a selection file, removes every listed application from one
//! environment, cascades to emptied stacks and prints the outcome.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use portainer_app_removal::core::notifications::{NotifierSet, TracingNotifier, WebhookNotifier};
use portainer_app_removal::{
    ApplicationRemover, Config, EnvironmentId, RemovalReport, Selection, SuccessReporting,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportScope {
    All,
    Applications,
    Stacks,
}

impl From<ReportScope> for SuccessReporting {
    fn from(scope: ReportScope) -> Self {
        match scope {
            ReportScope::All => SuccessReporting::All,
            ReportScope::Applications => SuccessReporting::ApplicationsOnly,
            ReportScope::Stacks => SuccessReporting::StacksOnly,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "remove-apps", version, about = "Remove Kubernetes applications and their emptied stacks")]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(short, long, env = "PORTAINER_CONFIG")]
    config: Option<PathBuf>,

    /// Target environment id
    #[arg(short, long, env = "PORTAINER_ENVIRONMENT_ID")]
    environment: EnvironmentId,

    /// JSON file with `applications` and `stacks`
    #[arg(short, long)]
    selection: PathBuf,

    /// Which rounds get a success summary
    #[arg(long, value_enum)]
    report: Option<ReportScope>,

    /// Maximum in-flight requests per round
    #[arg(long)]
    concurrency: Option<usize>,

    /// Also post notifications to this Slack-compatible webhook
    #[arg(long)]
    webhook: Option<String>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(scope) = cli.report {
        config.removal.success_reporting = scope.into();
    }
    if cli.concurrency.is_some() {
        config.removal.concurrency = cli.concurrency;
    }

    config.validate()?;
    Ok(config)
}

fn print_summary(report: &RemovalReport) {
    for app in &report.applications.fulfilled {
        println!("removed application {}/{}", app.resource_pool, app.name);
    }
    for stack in &report.stacks.fulfilled {
        println!("removed stack {}/{}", stack.resource_pool, stack.name);
    }
    for rejected in &report.applications.rejected {
        println!(
            "failed application {}/{}: {}",
            rejected.item.resource_pool, rejected.item.name, rejected.reason
        );
    }
    for rejected in &report.stacks.rejected {
        println!(
            "failed stack {}/{}: {}",
            rejected.item.resource_pool, rejected.item.name, rejected.reason
        );
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(&cli).await?;
    let selection = Selection::from_file(&cli.selection)
        .await
        .with_context(|| format!("Failed to load selection {:?}", cli.selection))?;

    let mut remover = ApplicationRemover::from_config(&config)?;
    if let Some(url) = &cli.webhook {
        let notifier = NotifierSet::new()
            .with(Arc::new(TracingNotifier))
            .with(Arc::new(WebhookNotifier::new(url.clone(), None)));
        remover = remover.with_notifier(Arc::new(notifier));
    }

    let report = remover
        .remove(cli.environment, selection.applications, &selection.stacks)
        .await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(!report.has_failures())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
