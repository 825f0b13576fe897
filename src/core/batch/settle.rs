//! Concurrent settle-all execution with order restoration

use crate::utils::error::PortainerError;
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::{Duration, Instant};

/// Configuration for settle-all execution
#[derive(Debug, Clone, Default)]
pub struct SettleConfig {
    /// Maximum in-flight operations; unset means every item at once
    pub concurrency: Option<usize>,
}

impl SettleConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set concurrency limit
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency.max(1));
        self
    }

    fn limit_for(&self, len: usize) -> usize {
        self.concurrency.unwrap_or(len).max(1)
    }
}

/// Outcome of one item
#[derive(Debug)]
pub struct SettledItem<T, R> {
    /// Index of the item in the original batch
    pub index: usize,
    /// The submitted item
    pub item: T,
    /// The operation result
    pub result: std::result::Result<R, PortainerError>,
    /// Time taken for this item
    pub duration: Duration,
}

/// A failed item with its failure reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejected<T> {
    pub item: T,
    pub reason: String,
}

/// Fulfilled/rejected partition of a batch, each side in submission order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement<T> {
    pub fulfilled: Vec<T>,
    pub rejected: Vec<Rejected<T>>,
}

impl<T> Default for Settlement<T> {
    fn default() -> Self {
        Self {
            fulfilled: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Settlement<T> {
    /// Partition settled items; expects them sorted by index
    pub fn from_settled<R>(settled: Vec<SettledItem<T, R>>) -> Self {
        let mut settlement = Self::default();
        for entry in settled {
            match entry.result {
                Ok(_) => settlement.fulfilled.push(entry.item),
                Err(e) => settlement.rejected.push(Rejected {
                    item: entry.item,
                    reason: e.to_string(),
                }),
            }
        }
        settlement
    }

    pub fn is_empty(&self) -> bool {
        self.fulfilled.is_empty() && self.rejected.is_empty()
    }

    pub fn total(&self) -> usize {
        self.fulfilled.len() + self.rejected.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Summary of a settle-all run
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Total items processed
    pub total: usize,
    /// Successful items
    pub succeeded: usize,
    /// Failed items
    pub failed: usize,
    /// Wall time for the whole batch
    pub total_duration: Duration,
    /// Slowest single item
    pub max_duration: Duration,
}

/// Run `operation` for every item and wait for all of them.
///
/// Results come back in submission order no matter how completions interleave.
pub async fn settle_all<T, R, F, Fut>(
    items: impl IntoIterator<Item = T>,
    operation: F,
    config: &SettleConfig,
) -> Vec<SettledItem<T, R>>
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = std::result::Result<R, PortainerError>>,
{
    let items: Vec<(usize, T)> = items.into_iter().enumerate().collect();
    let limit = config.limit_for(items.len());

    let mut settled: Vec<SettledItem<T, R>> = stream::iter(items)
        .map(|(index, item)| {
            let pending = operation(item.clone());
            async move {
                let start = Instant::now();
                let result = pending.await;
                SettledItem {
                    index,
                    item,
                    result,
                    duration: start.elapsed(),
                }
            }
        })
        .buffer_unordered(limit)
        .collect()
        .await;

    settled.sort_by_key(|s| s.index);
    settled
}

/// [`settle_all`] plus summary statistics
pub async fn settle_all_with_summary<T, R, F, Fut>(
    items: impl IntoIterator<Item = T>,
    operation: F,
    config: &SettleConfig,
) -> (Vec<SettledItem<T, R>>, BatchSummary)
where
    T: Clone,
    F: Fn(T) -> Fut,
    Fut: Future<Output = std::result::Result<R, PortainerError>>,
{
    let start = Instant::now();
    let settled = settle_all(items, operation, config).await;
    let total_duration = start.elapsed();

    let total = settled.len();
    let succeeded = settled.iter().filter(|s| s.result.is_ok()).count();
    let max_duration = settled
        .iter()
        .map(|s| s.duration)
        .max()
        .unwrap_or(Duration::ZERO);

    let summary = BatchSummary {
        total,
        succeeded,
        failed: total - succeeded,
        total_duration,
        max_duration,
    };

    (settled, summary)
}
