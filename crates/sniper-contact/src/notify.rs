//! User-facing notifications (toasts).

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::validation::InvalidReason;

/// Fallback description when the gateway gives no reason.
pub const GENERIC_FAILURE: &str = "We couldn't send your message right now. Please try again.";

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Feedback for a rejected submission.
    pub fn invalid(reason: InvalidReason) -> Self {
        match reason {
            InvalidReason::MissingFields => Self::error(
                "Missing fields",
                "Please fill in your name, email, and message.",
            ),
            InvalidReason::BadEmailFormat => {
                Self::error("Invalid email", "Please enter a valid email address.")
            }
        }
    }

    /// Feedback for a deployment without gateway credentials.
    pub fn misconfigured() -> Self {
        Self::error(
            "Configuration error",
            "Email service is not configured. Please set the EMAILJS_* configuration values.",
        )
    }

    /// Feedback after the gateway accepted the message.
    pub fn sent() -> Self {
        Self::info(
            "Message sent successfully!",
            "We'll get back to you within 24 hours.",
        )
    }

    /// Feedback after the gateway refused or could not be reached.
    pub fn send_failed(detail: Option<&str>) -> Self {
        Self::error("Sending failed", detail.unwrap_or(GENERIC_FAILURE))
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Surface for notifications. Must return promptly and never fail.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Delivers every notification to both sinks, in order.
impl<A: NotificationSink, B: NotificationSink> NotificationSink for (A, B) {
    fn notify(&self, notification: Notification) {
        self.0.notify(notification.clone());
        self.1.notify(notification);
    }
}

/// Collects notifications in order, for rendering into a response.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Notification>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything queued so far.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Take everything queued so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        // A poisoned queue still holds valid notifications.
        self.toasts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}

/// Writes notifications to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Info => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            NotificationKind::Error => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
        }
    }
}
