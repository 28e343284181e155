use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A user-visible message (a toast, in the browser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Queue of messages waiting to be shown. Clones share the queue.
#[derive(Clone, Default)]
pub struct Notifications {
    queue: Arc<Mutex<Vec<Notification>>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn info(&self, message: impl Into<String>) {
        let message = message.into();
        info!(%message, "notification");
        self.lock().push(Notification {
            level: NotificationLevel::Info,
            message,
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "error notification");
        self.lock().push(Notification {
            level: NotificationLevel::Error,
            message,
        });
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.lock()
            .iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .cloned()
            .collect()
    }

    /// Hands the pending messages to the view and empties the queue.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }
}
