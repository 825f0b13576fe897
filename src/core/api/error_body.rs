//! Failure message extraction from API error bodies

use reqwest::StatusCode;
use serde_json::Value;

const MAX_RAW_BODY: usize = 200;

/// Shape of the error body an endpoint answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    /// Kubernetes `Status` object relayed by the proxy
    Kubernetes,
    /// Portainer's own `{ message, details }` body
    Portainer,
}

impl ErrorFormat {
    /// Human-readable cause for a failed response
    pub fn message(self, status: StatusCode, body: &str) -> String {
        let parsed = serde_json::from_str::<Value>(body).ok();

        let from_json = parsed.as_ref().and_then(|json| match self {
            Self::Kubernetes => string_field(json, "message")
                .or_else(|| string_field(json, "details")),
            Self::Portainer => string_field(json, "details")
                .or_else(|| string_field(json, "message")),
        });

        if let Some(message) = from_json {
            return message;
        }

        let raw = body.trim();
        if parsed.is_none() && !raw.is_empty() {
            return truncate(raw, MAX_RAW_BODY);
        }

        match status.canonical_reason() {
            Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        }
    }
}

fn string_field(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
