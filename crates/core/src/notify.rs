//! Abstract notification sink.
//!
//! Cart operations report user-facing events (item added, item removed,
//! order submitted) through the [`Notifier`] trait. How notifications are
//! rendered is up to the caller - the storefront queues them per session,
//! tests collect them into a `Vec`.

use serde::{Deserialize, Serialize};

/// Severity of a notification, distinguishing informational from
/// destructive or error outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Routine informational event.
    Info,
    /// Destructive or error outcome (e.g., item removed).
    Destructive,
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short headline (e.g., "Pulseirinha adicionada!").
    pub title: String,
    /// Longer description shown under the title.
    pub description: String,
    /// Informational vs destructive styling hint.
    pub severity: Severity,
}

impl Notification {
    /// Create an informational notification.
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// Create a destructive notification.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    /// Deliver one notification. Must not fail; delivery is best-effort.
    fn notify(&mut self, notification: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_notifier_collects() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::info("Added", "Item added to cart"));
        sink.notify(Notification::destructive("Removed", "Item removed"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].severity, Severity::Info);
        assert_eq!(sink[1].severity, Severity::Destructive);
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Destructive).expect("serialize");
        assert_eq!(json, "\"destructive\"");
    }
}
