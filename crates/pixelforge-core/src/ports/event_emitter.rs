//! Event emitter trait for publishing workflow events.
//!
//! Implementations handle transport details (channels, UI bridges, etc.).

use tokio::sync::mpsc;

use crate::events::WorkflowEvent;

/// Trait for emitting workflow events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts without an observer
/// - `ChannelEmitter` - Forwards into a tokio unbounded channel
pub trait WorkflowEventEmitter: Send + Sync {
    /// Emit an event. Must not block.
    fn emit(&self, event: WorkflowEvent);
}

/// A no-op event emitter for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl WorkflowEventEmitter for NoopEmitter {
    fn emit(&self, _event: WorkflowEvent) {
        // Intentionally do nothing
    }
}

/// Emitter backed by an unbounded tokio channel.
///
/// Events emitted after the receiver is dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<WorkflowEvent>,
}

impl ChannelEmitter {
    /// Create an emitter and the receiver that observes it.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<WorkflowEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl WorkflowEventEmitter for ChannelEmitter {
    fn emit(&self, event: WorkflowEvent) {
        if self.tx.send(event).is_err() {
            tracing::trace!("Workflow event dropped, receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProcessingState;
    use std::sync::Arc;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopEmitter::new();

        // Should not panic
        emitter.emit(WorkflowEvent::ResultCleared);
    }

    #[test]
    fn test_channel_emitter_delivers() {
        let (emitter, mut rx) = ChannelEmitter::new();
        emitter.emit(WorkflowEvent::state_changed(ProcessingState::Failed));

        assert_eq!(
            rx.try_recv().unwrap(),
            WorkflowEvent::state_changed(ProcessingState::Failed)
        );
    }

    #[test]
    fn test_channel_emitter_after_receiver_dropped() {
        let (emitter, rx) = ChannelEmitter::new();
        drop(rx);
        let emitter: Arc<dyn WorkflowEventEmitter> = Arc::new(emitter);
        emitter.emit(WorkflowEvent::ResultCleared);
    }
}
