//! Application and stack types
//!
//! Field names follow the JSON rows the management API lists, so a listing
//! response can be fed straight back into a removal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment (endpoint) identifier
pub type EnvironmentId = u32;

/// Deployment flavor of an application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationKind {
    Deployment,
    DaemonSet,
    StatefulSet,
    Pod,
    Helm,
    /// A tag outside the supported set, kept verbatim
    Unrecognized(String),
}

impl ApplicationKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Deployment => "Deployment",
            Self::DaemonSet => "DaemonSet",
            Self::StatefulSet => "StatefulSet",
            Self::Pod => "Pod",
            Self::Helm => "Helm",
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Whether removing an application of this kind updates stack membership.
    ///
    /// Helm releases are not tracked as stack members.
    pub fn prunes_stack_membership(&self) -> bool {
        matches!(
            self,
            Self::Deployment | Self::DaemonSet | Self::StatefulSet | Self::Pod
        )
    }
}

impl From<String> for ApplicationKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Deployment" => Self::Deployment,
            "DaemonSet" => Self::DaemonSet,
            "StatefulSet" => Self::StatefulSet,
            "Pod" => Self::Pod,
            "Helm" => Self::Helm,
            _ => Self::Unrecognized(tag),
        }
    }
}

impl From<&str> for ApplicationKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ApplicationKind> for String {
    fn from(kind: ApplicationKind) -> Self {
        match kind {
            ApplicationKind::Unrecognized(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ApplicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// apps/v1 controllers removed through the Kubernetes proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Deployment,
    DaemonSet,
    StatefulSet,
}

impl WorkloadKind {
    /// Resource collection name in the apps/v1 API
    pub fn collection(self) -> &'static str {
        match self {
            Self::Deployment => "deployments",
            Self::DaemonSet => "daemonsets",
            Self::StatefulSet => "statefulsets",
        }
    }
}

/// One deployable unit selected for removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Application {
    pub name: String,
    /// Namespace the application lives in
    pub resource_pool: String,
    /// Stack the application was deployed as part of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_name: Option<String>,
    #[serde(rename = "ApplicationType")]
    pub kind: ApplicationKind,
}

impl Application {
    pub fn new(
        name: impl Into<String>,
        resource_pool: impl Into<String>,
        kind: impl Into<ApplicationKind>,
    ) -> Self {
        Self {
            name: name.into(),
            resource_pool: resource_pool.into(),
            stack_name: None,
            kind: kind.into(),
        }
    }

    pub fn in_stack(mut self, stack_name: impl Into<String>) -> Self {
        self.stack_name = Some(stack_name.into());
        self
    }

    /// Whether this application is recorded under `stack`
    pub fn belongs_to(&self, stack: &Stack) -> bool {
        self.stack_name.as_deref() == Some(stack.name.as_str())
            && self.resource_pool == stack.resource_pool
    }
}

/// Member entry of a stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackMember {
    pub name: String,
}

impl StackMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Named group of applications deployed together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stack {
    pub name: String,
    pub resource_pool: String,
    #[serde(default)]
    pub applications: Vec<StackMember>,
}

impl Stack {
    pub fn new<I, S>(name: impl Into<String>, resource_pool: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            resource_pool: resource_pool.into(),
            applications: members.into_iter().map(StackMember::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}
