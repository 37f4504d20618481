//! FIFO of pending notifications.

use std::collections::VecDeque;

use tracing::trace;

use super::event::GameEvent;

/// Events waiting for the host to drain them, oldest first.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        trace!(kind = event.kind(), "event queued");
        self.events.push_back(event);
    }

    /// Take every pending event.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}
