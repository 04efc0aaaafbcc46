use super::{
    DEFAULT_TIMEOUT_MS, Notification, NotificationId, NotificationKind, QueueEvent, Scheduler,
    TokioScheduler,
};
use crate::ClientError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

type Entries = Mutex<Vec<Notification>>;

/// Ordered notification list with per-entry expiry
///
/// Clones share the same list. Every mutation happens under one lock, so an
/// expiry timer racing an explicit `remove` or `clear_all` cannot lose
/// updates. Timers only hold a weak reference and do nothing once their
/// entry (or the queue) is gone.
#[derive(Clone)]
pub struct NotificationQueue {
    entries: Arc<Entries>,
    scheduler: Arc<dyn Scheduler>,
    events: broadcast::Sender<QueueEvent>,
}

impl NotificationQueue {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            scheduler,
            events,
        }
    }

    /// Queue driven by real timers on the current tokio runtime
    ///
    /// Returns `None` outside a runtime.
    pub fn with_tokio() -> Option<Self> {
        TokioScheduler::try_current().map(|s| Self::new(Arc::new(s)))
    }

    /// Append a notification and arm its expiry timer
    ///
    /// `timeout` is in milliseconds; `None` uses [`DEFAULT_TIMEOUT_MS`],
    /// zero or negative never expires.
    pub fn add(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        timeout: Option<i64>,
    ) -> NotificationId {
        let message = message.into();
        let timeout_ms = timeout.unwrap_or(DEFAULT_TIMEOUT_MS);

        // ids are minted under the lock so display order follows id order
        let id = {
            let mut entries = lock(&self.entries);
            let notification = Notification::new(message, kind, timeout_ms);
            let id = notification.id;
            entries.push(notification.clone());
            let _ = self.events.send(QueueEvent::Added(notification));
            id
        };
        tracing::debug!(%id, %kind, timeout_ms, "Notification added");

        if let Ok(ms) = u64::try_from(timeout_ms)
            && ms > 0
        {
            let entries = Arc::downgrade(&self.entries);
            let events = self.events.clone();
            self.scheduler.schedule(
                Duration::from_millis(ms),
                Box::new(move || expire(&entries, &events, id)),
            );
        }

        id
    }

    /// Remove an entry; unknown ids are ignored
    pub fn remove(&self, id: NotificationId) {
        remove_entry(&self.entries, &self.events, id);
    }

    pub fn clear_all(&self) {
        let mut entries = lock(&self.entries);
        entries.clear();
        let _ = self.events.send(QueueEvent::Cleared);
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Success, None)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Error, None)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Info, None)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Warning, None)
    }

    pub fn success_with_timeout(&self, message: impl Into<String>, timeout_ms: i64) -> NotificationId {
        self.add(message, NotificationKind::Success, Some(timeout_ms))
    }

    pub fn error_with_timeout(&self, message: impl Into<String>, timeout_ms: i64) -> NotificationId {
        self.add(message, NotificationKind::Error, Some(timeout_ms))
    }

    pub fn info_with_timeout(&self, message: impl Into<String>, timeout_ms: i64) -> NotificationId {
        self.add(message, NotificationKind::Info, Some(timeout_ms))
    }

    pub fn warning_with_timeout(&self, message: impl Into<String>, timeout_ms: i64) -> NotificationId {
        self.add(message, NotificationKind::Warning, Some(timeout_ms))
    }

    /// Surface a repository failure: offline is a warning, anything else an
    /// error
    pub fn report_error(&self, err: &ClientError) -> NotificationId {
        if err.is_connectivity() {
            self.warning(err.user_message())
        } else {
            self.error(err.user_message())
        }
    }

    /// Snapshot in display order (oldest first)
    pub fn list(&self) -> Vec<Notification> {
        lock(&self.entries).clone()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        lock(&self.entries).iter().any(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// Receive add/remove/clear events from now on
    pub fn subscribe(&self) -> broadcast::Receiver<QueueEvent> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationQueue")
            .field("len", &self.len())
            .finish()
    }
}

fn lock(entries: &Entries) -> MutexGuard<'_, Vec<Notification>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

fn remove_entry(entries: &Entries, events: &broadcast::Sender<QueueEvent>, id: NotificationId) -> bool {
    let mut entries = lock(entries);
    match entries.iter().position(|n| n.id == id) {
        Some(index) => {
            entries.remove(index);
            let _ = events.send(QueueEvent::Removed(id));
            true
        }
        None => false,
    }
}

fn expire(entries: &Weak<Entries>, events: &broadcast::Sender<QueueEvent>, id: NotificationId) {
    let Some(entries) = entries.upgrade() else {
        return;
    };
    if remove_entry(&entries, events, id) {
        tracing::debug!(%id, "Notification expired");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualScheduler;
    use crate::error::{Operation, TransportError};
    use http::StatusCode;

    fn queue() -> (NotificationQueue, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        (NotificationQueue::new(Arc::new(scheduler.clone())), scheduler)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_add_appends_in_order() {
        let (queue, _) = queue();
        let first = queue.info("first");
        let second = queue.success("second");
        assert_ne!(first, second);

        let list = queue.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, first);
        assert_eq!(list[0].kind, NotificationKind::Info);
        assert_eq!(list[1].id, second);
        assert_eq!(list[1].message, "second");
        assert_eq!(list[1].timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_expires_after_timeout() {
        let (queue, clock) = queue();
        let id = queue.warning_with_timeout("short", 100);
        queue.info("default");

        clock.advance(ms(99));
        assert!(queue.contains(id));

        clock.advance(ms(1));
        assert!(!queue.contains(id));
        assert_eq!(queue.len(), 1);

        clock.advance(ms(4900));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_non_positive_timeout_never_expires() {
        let (queue, clock) = queue();
        queue.error_with_timeout("sticky", 0);
        queue.info_with_timeout("also sticky", -1);
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(3600));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_remove_unknown_or_expired_is_noop() {
        let (queue, clock) = queue();
        let id = queue.success_with_timeout("done", 10);
        clock.advance(ms(10));
        assert!(queue.is_empty());

        queue.remove(id);
        queue.remove(NotificationId::new());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_explicit_remove_then_timer() {
        let (queue, clock) = queue();
        let id = queue.info("bye");
        let other = queue.info("stay");
        queue.remove(id);
        assert_eq!(queue.list()[0].id, other);

        clock.advance(ms(DEFAULT_TIMEOUT_MS as u64 - 1));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_clear_all_then_pending_timers_fire() {
        let (queue, clock) = queue();
        queue.info("a");
        queue.error("b");
        queue.clear_all();
        assert!(queue.is_empty());

        clock.advance(ms(1000));
        let fresh = queue.info("fresh");
        clock.advance(ms(4000));
        assert_eq!(clock.pending(), 1);
        assert!(queue.contains(fresh));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_timers_outlive_queue() {
        let (queue, clock) = queue();
        queue.info("orphan");
        drop(queue);
        clock.advance(ms(DEFAULT_TIMEOUT_MS as u64));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_concurrent_adds_get_distinct_ids() {
        let (queue, _) = queue();
        let ids: Vec<NotificationId> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let queue = queue.clone();
                    s.spawn(move || queue.info(format!("n{}", i)))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 8);
        assert_eq!(queue.len(), 8);
        for id in ids {
            assert!(queue.contains(id));
        }
    }

    #[test]
    fn test_concurrent_adds_keep_ids_in_display_order() {
        let (queue, _) = queue();
        std::thread::scope(|s| {
            for t in 0..4 {
                let queue = queue.clone();
                s.spawn(move || {
                    for i in 0..50 {
                        queue.info(format!("t{}-{}", t, i));
                    }
                });
            }
        });

        let ids: Vec<NotificationId> = queue.list().iter().map(|n| n.id).collect();
        assert_eq!(ids.len(), 200);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_events() {
        let (queue, clock) = queue();
        let mut rx = queue.subscribe();

        let id = queue.info_with_timeout("hello", 50);
        clock.advance(ms(50));
        queue.clear_all();

        match rx.try_recv().unwrap() {
            QueueEvent::Added(n) => assert_eq!(n.id, id),
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(rx.try_recv().unwrap(), QueueEvent::Removed(id));
        assert_eq!(rx.try_recv().unwrap(), QueueEvent::Cleared);
    }

    #[test]
    fn test_report_error_kinds() {
        let (queue, _) = queue();
        queue.report_error(&ClientError::Connectivity);
        let err: ClientError = TransportError::new(
            "reservation",
            Operation::Create,
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .into();
        queue.report_error(&err);

        let list = queue.list();
        assert_eq!(list[0].kind, NotificationKind::Warning);
        assert_eq!(list[0].message, "No internet connection available");
        assert_eq!(list[1].kind, NotificationKind::Error);
        assert_eq!(
            list[1].message,
            "Error creating reservation: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_real_timer_expiry() {
        let queue = NotificationQueue::with_tokio().unwrap();
        queue.info_with_timeout("quick", 10);
        queue.info_with_timeout("sticky", 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.list()[0].message, "sticky");
    }
}
