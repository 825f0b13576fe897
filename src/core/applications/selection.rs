//! Removal selections loaded from disk

use super::types::{Application, Stack};
use crate::utils::error::{PortainerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Applications chosen for removal plus the stack listing they came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub applications: Vec<Application>,
    #[serde(default)]
    pub stacks: Vec<Stack>,
}

impl Selection {
    /// Read a JSON selection file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let selection: Self = serde_json::from_str(&content)?;
        selection.validate()?;

        debug!(
            "Loaded selection of {} applications and {} stacks from {:?}",
            selection.applications.len(),
            selection.stacks.len(),
            path
        );
        Ok(selection)
    }

    /// Reject selections the API would refuse anyway
    pub fn validate(&self) -> Result<()> {
        for app in &self.applications {
            if app.name.trim().is_empty() {
                return Err(PortainerError::Validation(
                    "application name cannot be empty".to_string(),
                ));
            }
            if app.resource_pool.trim().is_empty() {
                return Err(PortainerError::Validation(format!(
                    "application '{}' has no namespace",
                    app.name
                )));
            }
        }
        Ok(())
    }
}
