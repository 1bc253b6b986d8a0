//! In-memory message bus for tests and single-process deployments.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tracing::warn;

use super::EventSink;
use crate::event::DomainEvent;

/// Unbounded FIFO of emitted events.
///
/// Clones share the same queue, so one handle can be given to the store while
/// another is kept for consuming.
///
/// ```
/// use user_registry::{QueueSink, UserRecord, UserStore};
///
/// let queue = QueueSink::new();
/// let store = UserStore::new(queue.clone());
///
/// store
///     .create(UserRecord::new("Ann", "Lee", "annie", "ann@x.com", "pw", "Korea"))
///     .unwrap();
///
/// let event = queue.poll().unwrap();
/// assert_eq!(event.topic(), "user_add");
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct QueueSink {
    queue: Arc<Mutex<VecDeque<DomainEvent>>>,
}

impl QueueSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest event, if any.
    pub fn poll(&self) -> Option<DomainEvent> {
        match self.queue.lock() {
            Ok(mut queue) => queue.pop_front(),
            Err(_) => {
                warn!("event queue poisoned during poll");
                None
            }
        }
    }

    /// Take every queued event in emission order.
    pub fn drain(&self) -> Vec<DomainEvent> {
        match self.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => {
                warn!("event queue poisoned during drain");
                Vec::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|queue| queue.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for QueueSink {
    fn emit(&self, event: DomainEvent) {
        match self.queue.lock() {
            Ok(mut queue) => queue.push_back(event),
            Err(_) => warn!(topic = event.topic(), "event queue poisoned, event dropped"),
        }
    }
}
