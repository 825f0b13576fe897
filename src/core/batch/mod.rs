//! Settle-all batch execution
//!
//! Runs one async operation per item, never short-circuits on failure,
//! and partitions the outcomes back into submission order.

mod settle;


pub use settle::{
    BatchSummary, Rejected, SettleConfig, SettledItem, Settlement, settle_all,
    settle_all_with_summary,
};
