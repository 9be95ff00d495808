//! Notification sink used by every mutating store operation.

use std::sync::Mutex;

use crate::models::{Notification, NotificationVariant};

/// Receives notifications from the store. Delivery is fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default sink: logs each notification and queues it until drained.
#[derive(Debug, Default)]
pub struct NotificationLog {
    pending: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *pending)
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Destructive => tracing::warn!(
                title = %notification.title,
                description = notification.description.as_deref().unwrap_or(""),
                "notification"
            ),
            NotificationVariant::Default => tracing::info!(
                title = %notification.title,
                description = notification.description.as_deref().unwrap_or(""),
                "notification"
            ),
        }

        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}
