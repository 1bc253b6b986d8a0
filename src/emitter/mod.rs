//! Event sinks - where the store sends notifications after a mutation.
//!
//! A sink is fire-and-forget: `emit` returns nothing, and a sink that cannot
//! deliver an event logs the failure and drops it. The store calls `emit`
//! only after its lock has been released, exactly once per successful
//! mutation.

#[cfg(feature = "emitter")]
mod local;
mod queue;

use std::sync::Arc;

use crate::event::DomainEvent;

#[cfg(feature = "emitter")]
pub use local::LocalEmitterSink;
pub use queue::QueueSink;

/// Receiver of domain events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    fn emit(&self, event: DomainEvent) {
        (**self).emit(event)
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: DomainEvent) {}
}
