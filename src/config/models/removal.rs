//! Removal workflow configuration

use serde::{Deserialize, Serialize};

/// Which rounds emit an aggregate success notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessReporting {
    /// Both the application round and the stack round
    #[default]
    All,
    /// Only the application round (application list views)
    ApplicationsOnly,
    /// Only the stack round (stack list views)
    StacksOnly,
}

impl SuccessReporting {
    pub fn applications(self) -> bool {
        matches!(self, Self::All | Self::ApplicationsOnly)
    }

    pub fn stacks(self) -> bool {
        matches!(self, Self::All | Self::StacksOnly)
    }
}

/// Removal workflow settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemovalConfig {
    /// Success notification policy
    #[serde(default)]
    pub success_reporting: SuccessReporting,
    /// Cap on in-flight requests per round, unbounded when unset
    #[serde(default)]
    pub concurrency: Option<usize>,
}
