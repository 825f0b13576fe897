//! Configuration data models
//!
//! This module defines all configuration structures used by the client.

pub mod api;
pub mod removal;

pub use api::*;
pub use removal::*;

/// Default Portainer API base URL
pub fn default_base_url() -> String {
    "http://localhost:9000/api".to_string()
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default user agent sent with every request
pub fn default_user_agent() -> String {
    format!("portainer-app-removal/{}", env!("CARGO_PKG_VERSION"))
}
