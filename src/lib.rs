//! # portainer-app-removal
//!
//! Batch removal of Kubernetes applications through the Portainer API.
//!
//! ## Features
//!
//! - **Per-item isolation**: every application is removed independently and
//!   failures never stop the rest of the batch
//! - **Stack cascade**: stacks left without members are removed in a second round
//! - **Ordered reports**: fulfilled/rejected partitions keep submission order
//! - **Notifications**: one message per failure, one summary per successful round
//! - **Cache invalidation**: listeners learn which environment's listing went stale
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portainer_app_removal::{Application, ApplicationRemover, Config, Stack};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/removal.yaml").await?;
//!     let remover = ApplicationRemover::from_config(&config)?;
//!
//!     let stacks = vec![Stack::new("shop", "default", ["web"])];
//!     let apps = vec![Application::new("web", "default", "Deployment").in_stack("shop")];
//!
//!     let report = remover.remove(1, apps, &stacks).await;
//!     println!(
//!         "{} applications and {} stacks removed",
//!         report.applications.fulfilled.len(),
//!         report.stacks.fulfilled.len()
//!     );
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{ApiConfig, Config, RemovalConfig, SuccessReporting};
pub use crate::core::api::{PortainerClient, RemovalBackend};
pub use crate::core::applications::{
    Application, ApplicationKind, ApplicationRemover, EnvironmentId, RemovalReport, Selection,
    Stack, StackMember,
};
pub use crate::core::batch::{Rejected, Settlement};
pub use crate::core::cache::{QueryCache, QueryKey};
pub use crate::core::notifications::{Notification, NotificationLevel, Notifier};
pub use utils::error::{PortainerError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
