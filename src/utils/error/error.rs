//! Error handling for the removal client
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, PortainerError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum PortainerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The request never produced a response
    #[error("{context}: {message}")]
    Network { context: String, message: String },

    /// The API answered with a non-success status
    #[error("{context}: {message}")]
    Api {
        context: String,
        status: u16,
        message: String,
    },

    /// Application kind outside the supported set
    #[error("Unknown application type: {0}")]
    UnsupportedKind(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl PortainerError {
    /// Create a network error with the operation it interrupted
    pub fn network(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an API error from a failed response
    pub fn api(context: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            context: context.into(),
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the failure came from talking to the remote API
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Api { .. } | Self::HttpClient(_)
        )
    }

    /// HTTP status of an API error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
