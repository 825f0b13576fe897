//! Utility modules
//!
//! - **error**: Error types and the crate-wide result alias
//! - **net**: HTTP client construction

pub mod error;
pub mod net;

pub use error::{PortainerError, Result};
