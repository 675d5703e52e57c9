//! Event dispatch: the message queue.
//!
//! [`EventDispatcher`] maintains a queue of [`Envelope`]s. It does not route
//! messages itself — that responsibility belongs to the engine, which drains
//! the queue and resolves each envelope's source through the binding table.

use std::collections::VecDeque;

use super::message::Envelope;

/// Queue-based event dispatcher.
///
/// Messages are enqueued via `push` and drained for processing via `drain`.
/// Draining preserves arrival order, which is what makes rapid sequential
/// edits to one field converge on the last value.
#[derive(Debug)]
pub struct EventDispatcher {
    queue: VecDeque<Envelope>,
}

impl EventDispatcher {
    /// Create a new, empty dispatcher.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue a message envelope for later processing.
    pub fn push(&mut self, envelope: Envelope) {
        self.queue.push_back(envelope);
    }

    /// Drain all pending messages and return them as a `Vec`.
    ///
    /// The queue is empty after this call.
    pub fn drain(&mut self) -> Vec<Envelope> {
        self.queue.drain(..).collect()
    }

    /// Number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
