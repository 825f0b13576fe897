//! User-facing notifications
//!
//! The removal workflow reports every failure and each round's successes
//! through a [`Notifier`]; sinks decide how they reach a person.

mod channels;
mod types;

pub use channels::{BufferedNotifier, Notifier, NotifierSet, TracingNotifier, WebhookNotifier};
pub use types::{Notification, NotificationLevel, pluralize};
