//! Notification channel implementations

use super::types::{Notification, NotificationLevel};
use crate::utils::error::{PortainerError, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Notification sink
#[async_trait::async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Deliver a notification
    async fn notify(&self, notification: &Notification) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;
}

/// Emits notifications as tracing events
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        match notification.level {
            NotificationLevel::Success => info!(
                title = %notification.title,
                detail = %notification.detail,
                "notification"
            ),
            NotificationLevel::Error => error!(
                title = %notification.title,
                reason = %notification.detail,
                "notification"
            ),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

/// Keeps notifications in memory until drained
#[derive(Debug, Default, Clone)]
pub struct BufferedNotifier {
    buffer: Arc<Mutex<Vec<Notification>>>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything received so far
    pub fn snapshot(&self) -> Vec<Notification> {
        self.buffer.lock().clone()
    }

    /// Take everything received so far
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

#[async_trait::async_trait]
impl Notifier for BufferedNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        self.buffer.lock().push(notification.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}

/// Posts Slack-compatible JSON to an incoming webhook
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    webhook_url: String,
    username: Option<String>,
    client: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(webhook_url: impl Into<String>, username: Option<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            username,
            client: reqwest::Client::new(),
        }
    }

    fn payload(&self, notification: &Notification) -> serde_json::Value {
        let color = match notification.level {
            NotificationLevel::Success => "#36a64f",
            NotificationLevel::Error => "#ff0000",
        };

        serde_json::json!({
            "username": self.username.as_deref().unwrap_or("Application removal"),
            "attachments": [{
                "color": color,
                "title": notification.title,
                "text": notification.detail,
                "ts": notification.timestamp.timestamp()
            }]
        })
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .timeout(Duration::from_secs(10))
            .json(&self.payload(notification))
            .send()
            .await
            .map_err(|e| PortainerError::network("Failed to send webhook notification", e.to_string()))?;

        response.error_for_status()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

/// Fans one notification out to several channels
#[derive(Debug, Default, Clone)]
pub struct NotifierSet {
    channels: Vec<Arc<dyn Notifier>>,
}

impl NotifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, channel: Arc<dyn Notifier>) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[async_trait::async_trait]
impl Notifier for NotifierSet {
    /// Delivers to every channel; the first failure is returned after all were tried
    async fn notify(&self, notification: &Notification) -> Result<()> {
        let mut first_error = None;
        for channel in &self.channels {
            if let Err(e) = channel.notify(notification).await {
                warn!("Notification channel {} failed: {}", channel.name(), e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn name(&self) -> &str {
        "set"
    }
}
