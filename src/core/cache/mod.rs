//! Cached query invalidation
//!
//! Listings of cluster resources are cached by whoever displays them. After a
//! mutation the owner of the data broadcasts which keys went stale; listeners
//! refetch on their own schedule.

use crate::core::applications::EnvironmentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;
use tracing::debug;

const DEFAULT_CAPACITY: usize = 64;

/// Key of a cached listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKey {
    /// Kubernetes application listing of one environment
    Applications(EnvironmentId),
}

impl QueryKey {
    pub fn environment_id(&self) -> EnvironmentId {
        match self {
            Self::Applications(id) => *id,
        }
    }

    /// Hierarchical key segments, outermost first
    pub fn segments(&self) -> Vec<String> {
        match self {
            Self::Applications(id) => vec![
                "environments".to_string(),
                id.to_string(),
                "kubernetes".to_string(),
                "applications".to_string(),
            ],
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

/// Broadcasts invalidated query keys
#[derive(Debug, Clone)]
pub struct QueryCache {
    sender: broadcast::Sender<QueryKey>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to invalidation events
    pub fn subscribe(&self) -> broadcast::Receiver<QueryKey> {
        self.sender.subscribe()
    }

    /// Mark `key` stale; returns how many listeners were told
    pub fn invalidate(&self, key: QueryKey) -> usize {
        match self.sender.send(key) {
            Ok(listeners) => {
                debug!("Invalidated {} for {} listeners", key, listeners);
                listeners
            }
            Err(_) => {
                debug!("Invalidated {} with no listeners", key);
                0
            }
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
