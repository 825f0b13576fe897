//! Notification values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast-style message for the operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    /// Success detail or failure reason
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.into(),
            detail: detail.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: title.into(),
            detail: reason.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// `word` for a count of one (either sign), `word` + "s" otherwise
pub fn pluralize(count: i64, word: &str) -> String {
    if count == 1 || count == -1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
