use std::sync::Mutex;

use event_emitter_rs::EventEmitter;
use tracing::warn;

use super::EventSink;
use crate::event::DomainEvent;

/// Sink that dispatches events to in-process listeners.
///
/// Each event is serialized to JSON and emitted under its topic
/// (`user_add`, `user_update`, `user_delete`). The underlying emitter runs
/// every listener on its own thread, so `emit` never waits on a listener.
pub struct LocalEmitterSink {
    emitter: Mutex<EventEmitter>,
}

impl Default for LocalEmitterSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalEmitterSink {
    pub fn new() -> Self {
        Self {
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Register a listener for a topic. The listener receives the JSON payload.
    pub fn on<F>(&self, topic: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.on(topic, listener);
            }
            Err(_) => warn!(topic, "event emitter poisoned, listener not registered"),
        }
    }
}

impl EventSink for LocalEmitterSink {
    fn emit(&self, event: DomainEvent) {
        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(topic = event.topic(), error = %err, "failed to serialize event");
                return;
            }
        };
        match self.emitter.lock() {
            Ok(mut emitter) => {
                emitter.emit(event.topic(), payload);
            }
            Err(_) => warn!(topic = event.topic(), "event emitter poisoned, event dropped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRecord;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn listeners_receive_json_payload() {
        let sink = LocalEmitterSink::new();
        let (tx, rx) = mpsc::channel();
        let tx = Mutex::new(tx);

        sink.on("user_add", move |payload| {
            let _ = tx.lock().unwrap().send(payload);
        });

        let user = UserRecord::new("Ann", "Lee", "annie", "ann@x.com", "pw", "Korea");
        sink.emit(DomainEvent::Created(user));

        // Listeners run on their own threads.
        let payload = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(json["topic"], "user_add");
        assert_eq!(json["user"]["email"], "ann@x.com");
    }

    #[test]
    fn other_topics_are_not_delivered() {
        let sink = LocalEmitterSink::new();
        let (tx, rx) = mpsc::channel::<String>();
        let tx = Mutex::new(tx);

        sink.on("user_delete", move |payload| {
            let _ = tx.lock().unwrap().send(payload);
        });

        let user = UserRecord::new("Ann", "Lee", "annie", "ann@x.com", "pw", "Korea");
        sink.emit(DomainEvent::Created(user));

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }
}
