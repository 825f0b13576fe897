//! Kubernetes application removal
//!
//! This module provides the application/stack model, stack membership
//! pruning, and the batch removal workflow built on top of them.

mod membership;
mod removal;
mod selection;
mod types;


pub use membership::{PrunedStacks, prune_stacks};
pub use removal::{ApplicationRemover, RemovalReport};
pub use selection::Selection;
pub use types::{Application, ApplicationKind, EnvironmentId, Stack, StackMember, WorkloadKind};
