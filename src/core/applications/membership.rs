//! Stack membership pruning
//!
//! Derives the post-removal stack list from the applications that were
//! actually removed, instead of editing stacks while removals are in flight.

use super::types::{Application, Stack};
use std::collections::HashSet;

/// Stack list after removing the members of deleted applications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrunedStacks {
    /// Every input stack, with removed members filtered out
    pub stacks: Vec<Stack>,
    /// Stacks that lost their last member in this batch, in input order
    pub emptied: Vec<Stack>,
}

/// Filter removed applications out of their stacks.
///
/// A stack is reported as emptied only when this batch removed at least one
/// of its members and none remain; stacks that were already empty are left
/// alone. Stacks are identified by name and namespace: when the listing
/// repeats one, only its first entry is pruned.
pub fn prune_stacks<'a, I>(stacks: &[Stack], removed: I) -> PrunedStacks
where
    I: IntoIterator<Item = &'a Application>,
{
    let removed: Vec<&Application> = removed
        .into_iter()
        .filter(|app| app.kind.prunes_stack_membership())
        .collect();

    let mut pruned = PrunedStacks::default();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for stack in stacks {
        if !seen.insert((stack.name.as_str(), stack.resource_pool.as_str())) {
            pruned.stacks.push(stack.clone());
            continue;
        }

        let gone: Vec<&str> = removed
            .iter()
            .filter(|app| app.belongs_to(stack))
            .map(|app| app.name.as_str())
            .collect();

        let mut next = stack.clone();
        if !gone.is_empty() {
            next.applications
                .retain(|member| !gone.contains(&member.name.as_str()));
        }

        if next.is_empty() && next.applications.len() < stack.applications.len() {
            pruned.emptied.push(next.clone());
        }
        pruned.stacks.push(next);
    }

    pruned
}
