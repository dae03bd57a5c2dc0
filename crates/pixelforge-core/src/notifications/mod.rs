//! Transient, self-expiring user notifications.
//!
//! Each pushed entry schedules its own removal after the configured
//! lifetime. Expiry is keyed by id, so entries disappear based on their own
//! creation time rather than queue order. Removal is idempotent: a manual
//! [`NotificationQueue::dismiss`] followed by the timer firing is a no-op.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::WorkflowEvent;
use crate::ports::WorkflowEventEmitter;

/// Unique, monotonically increasing notification id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentation hint for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A single user-facing message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct QueueInner {
    next_id: u64,
    entries: Vec<Notification>,
}

/// Ordered collection of live notifications (insertion order = display order).
///
/// Cloning shares the underlying collection. Expiry timers run on the
/// ambient tokio runtime and hold only a weak reference, so dropping every
/// clone cancels nothing but leaks nothing either.
#[derive(Clone)]
pub struct NotificationQueue {
    inner: Arc<Mutex<QueueInner>>,
    lifetime: Duration,
    emitter: Arc<dyn WorkflowEventEmitter>,
}

impl fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("lifetime", &self.lifetime)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl NotificationQueue {
    /// Create an empty queue whose entries live for `lifetime`.
    pub fn new(lifetime: Duration, emitter: Arc<dyn WorkflowEventEmitter>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueInner::default())),
            lifetime,
            emitter,
        }
    }

    fn lock(&self) -> MutexGuard<'_, QueueInner> {
        lock_inner(&self.inner)
    }

    /// Append a notification and schedule its removal.
    pub fn push(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let notification = {
            let mut inner = self.lock();
            inner.next_id += 1;
            let notification = Notification {
                id: NotificationId(inner.next_id),
                message: message.into(),
                severity,
                created_at: Utc::now(),
            };
            inner.entries.push(notification.clone());
            notification
        };
        let id = notification.id;

        tracing::debug!(id = %id, severity = ?severity, message = %notification.message, "Notification pushed");
        self.emitter.emit(WorkflowEvent::NotificationAdded { notification });
        self.schedule_expiry(id);
        id
    }

    /// Convenience for [`Severity::Success`].
    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.push(message, Severity::Success)
    }

    /// Convenience for [`Severity::Error`].
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.push(message, Severity::Error)
    }

    fn schedule_expiry(&self, id: NotificationId) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(id = %id, "No async runtime, notification will not expire on its own");
            return;
        };

        let weak: Weak<Mutex<QueueInner>> = Arc::downgrade(&self.inner);
        let emitter = Arc::clone(&self.emitter);
        let lifetime = self.lifetime;
        runtime.spawn(async move {
            tokio::time::sleep(lifetime).await;
            if let Some(inner) = weak.upgrade() {
                if remove_entry(&inner, id) {
                    emitter.emit(WorkflowEvent::NotificationExpired { id });
                }
            }
        });
    }

    /// Remove a notification now. Returns `false` if it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let removed = remove_entry(&self.inner, id);
        if removed {
            self.emitter.emit(WorkflowEvent::NotificationExpired { id });
        }
        removed
    }

    /// Remove every notification.
    pub fn clear(&self) {
        let drained: Vec<NotificationId> = {
            let mut inner = self.lock();
            inner.entries.drain(..).map(|n| n.id).collect()
        };
        for id in drained {
            self.emitter.emit(WorkflowEvent::NotificationExpired { id });
        }
    }

    /// Live notifications in display order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().entries.clone()
    }

    /// Number of live notifications.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether no notification is live.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// How long each entry stays live.
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

fn lock_inner(inner: &Mutex<QueueInner>) -> MutexGuard<'_, QueueInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn remove_entry(inner: &Mutex<QueueInner>, id: NotificationId) -> bool {
    let mut inner = lock_inner(inner);
    let before = inner.entries.len();
    inner.entries.retain(|n| n.id != id);
    inner.entries.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ChannelEmitter, NoopEmitter};

    fn queue(lifetime_ms: u64) -> NotificationQueue {
        NotificationQueue::new(Duration::from_millis(lifetime_ms), Arc::new(NoopEmitter::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_push_assigns_monotonic_ids_in_order() {
        let queue = queue(5000);
        let a = queue.success("first");
        let b = queue.error("second");

        assert!(b > a);
        let entries = queue.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[0].severity, Severity::Success);
        assert_eq!(entries[1].message, "second");
        assert_eq!(entries[1].severity, Severity::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_independently() {
        let queue = queue(5000);
        let first = queue.success("first");

        tokio::time::sleep(Duration::from_millis(3000)).await;
        let second = queue.success("second");

        tokio::time::sleep(Duration::from_millis(2001)).await;
        let ids: Vec<_> = queue.snapshot().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second]);
        assert_ne!(ids[0], first);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        assert!(queue.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_then_expiry_is_noop() {
        let queue = queue(100);
        let id = queue.error("boom");
        let other = queue.error("other");

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert_eq!(queue.len(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(queue.is_empty());
        assert!(!queue.dismiss(other));
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_emitted_for_add_and_expiry() {
        let (emitter, mut rx) = ChannelEmitter::new();
        let queue = NotificationQueue::new(Duration::from_millis(10), Arc::new(emitter));
        let id = queue.success("done");

        match rx.recv().await {
            Some(WorkflowEvent::NotificationAdded { notification }) => {
                assert_eq!(notification.id, id);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
        match rx.recv().await {
            Some(WorkflowEvent::NotificationExpired { id: expired }) => assert_eq!(expired, id),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_push_without_runtime_keeps_entry() {
        let queue = queue(10);
        queue.success("no runtime");
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let queue = queue(10);
        queue.error("quota exceeded");
        let json = serde_json::to_value(&queue.snapshot()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["severity"], "error");
        assert_eq!(json["message"], "quota exceeded");
        assert!(json.get("createdAt").is_some());
    }
}
