use strum_macros::Display;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::debug;

/// Severity of a transient user-facing notification (toast in the UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A transient, human-readable message. No structured codes; every failure
/// path in the crate reduces to one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Cloneable handle that routes notifications to whatever front end is
/// attached (UI toast bridge, CLI printer, test collector).
#[derive(Clone)]
pub struct Notifier {
    tx: UnboundedSender<Notification>,
}

impl Notifier {
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn notify(&self, level: NotificationLevel, title: &str, message: impl Into<String>) {
        let message = message.into();
        debug!(%level, title, %message, "notification");
        // Receiver dropping just means nobody is displaying toasts anymore.
        let _ = self.tx.send(Notification {
            level,
            title: title.to_string(),
            message,
        });
    }

    pub fn info(&self, title: &str, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    pub fn success(&self, title: &str, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, title, message);
    }

    pub fn error(&self, title: &str, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }
}
