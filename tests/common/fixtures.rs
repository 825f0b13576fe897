//! Test fixtures and data factories
//!
//! Factory methods for applications and stacks with sensible defaults.

use portainer_app_removal::{Application, Stack};

pub const NAMESPACE: &str = "default";

/// Factory for creating applications
pub struct ApplicationFactory;

impl ApplicationFactory {
    pub fn deployment(name: &str) -> Application {
        Application::new(name, NAMESPACE, "Deployment")
    }

    pub fn daemon_set(name: &str) -> Application {
        Application::new(name, NAMESPACE, "DaemonSet")
    }

    pub fn stateful_set(name: &str) -> Application {
        Application::new(name, NAMESPACE, "StatefulSet")
    }

    pub fn pod(name: &str) -> Application {
        Application::new(name, NAMESPACE, "Pod")
    }

    pub fn helm(name: &str) -> Application {
        Application::new(name, NAMESPACE, "Helm")
    }

    pub fn of_kind(name: &str, kind: &str) -> Application {
        Application::new(name, NAMESPACE, kind)
    }
}

/// Factory for creating stacks
pub struct StackFactory;

impl StackFactory {
    pub fn with_members(name: &str, members: &[&str]) -> Stack {
        Stack::new(name, NAMESPACE, members.iter().copied())
    }
}
