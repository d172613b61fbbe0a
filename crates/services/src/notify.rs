//! In-process notification hub.
//!
//! A single hub instance is created when a session starts and shut down when
//! it ends; consumers receive it by injection rather than reaching for a
//! process-wide global. The hub fans out session events over a broadcast
//! channel. Actual network transport, if any, subscribes like any other
//! consumer and is out of scope here.

use coursetrack_core::CourseId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Default fan-out buffer size.
const CHANNEL_CAPACITY: usize = 64;

/// Events the hub distributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notification {
    /// A course's content or enrollment changed upstream.
    CourseUpdated {
        /// Affected course
        course: CourseId,
    },
    /// A progress write-through succeeded or failed.
    ProgressSaved {
        /// Affected course
        course: CourseId,
        /// Whether the write reached the store
        saved: bool,
    },
    /// Free-form broadcast to the whole session.
    Announcement {
        /// Message body
        message: String,
    },
}

/// Errors raised when publishing.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The hub has been shut down or has no subscribers left
    #[error("notification hub is closed")]
    Closed,
}

/// Fan-out hub with an explicit lifecycle.
#[derive(Debug)]
pub struct NotificationHub {
    tx: Option<broadcast::Sender<Notification>>,
}

impl NotificationHub {
    /// Start a hub.
    pub fn start() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx: Some(tx) }
    }

    /// Whether the hub is accepting publishes.
    pub fn is_open(&self) -> bool {
        self.tx.is_some()
    }

    /// Subscribe to future notifications. Panics never; a shut-down hub
    /// yields a receiver that reports closure immediately.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        match &self.tx {
            Some(tx) => tx.subscribe(),
            None => broadcast::channel(1).1,
        }
    }

    /// Publish a notification to all current subscribers.
    ///
    /// Having zero subscribers is not an error; only a shut-down hub is.
    pub fn publish(&self, notification: Notification) -> Result<(), NotifyError> {
        let tx = self.tx.as_ref().ok_or(NotifyError::Closed)?;
        debug!(?notification, receivers = tx.receiver_count(), "notification published");
        // send only fails with zero receivers, which we don't treat as an
        // error.
        let _ = tx.send(notification);
        Ok(())
    }

    /// Shut the hub down. Subsequent publishes fail and subscribers see the
    /// channel close.
    pub fn shutdown(&mut self) {
        self.tx = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_published_events() {
        let hub = NotificationHub::start();
        let mut rx = hub.subscribe();

        let course = CourseId::new();
        hub.publish(Notification::CourseUpdated { course }).unwrap();

        assert_eq!(rx.recv().await.unwrap(), Notification::CourseUpdated { course });
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_fine() {
        let hub = NotificationHub::start();
        hub.publish(Notification::Announcement {
            message: "maintenance tonight".to_string(),
        })
        .unwrap();
    }

    #[tokio::test]
    async fn shutdown_closes_the_hub() {
        let mut hub = NotificationHub::start();
        let mut rx = hub.subscribe();
        hub.shutdown();

        assert!(!hub.is_open());
        assert!(matches!(
            hub.publish(Notification::Announcement { message: String::new() }),
            Err(NotifyError::Closed)
        ));
        assert!(rx.recv().await.is_err());
    }

    #[test]
    fn notifications_serialize_with_a_type_tag() {
        let course = CourseId::new();
        let json = serde_json::to_value(Notification::ProgressSaved { course, saved: false })
            .unwrap();
        assert_eq!(json["type"], "progressSaved");
        assert_eq!(json["saved"], false);
    }
}
