//! Events emitted to the presentation layer.
//!
//! ## Key Components
//!
//! - [`RoundEvent`]: an event tagged with the round generation
//! - [`EventKind`]: `Matched`, `Rejected`, `Revealed`, `RoundComplete`
//! - [`EventQueue`]: buffered events for an adapter to drain
//!
//! ## Example Usage
//!
//! ```
//! use rust_matchgame::core::{QuestionId, RoundGeneration};
//! use rust_matchgame::events::{EventQueue, EventKind};
//! use rust_matchgame::round::MatchOutcome;
//!
//! let mut queue = EventQueue::new();
//! let outcome = MatchOutcome::Matched {
//!     definition: QuestionId::new("q1"),
//!     term: QuestionId::new("q1"),
//!     completion: None,
//! };
//!
//! queue.push_outcome(RoundGeneration::new(1), &outcome);
//! let events = queue.drain();
//! assert!(matches!(events[0].kind, EventKind::Matched { .. }));
//! ```

mod event;

pub use event::{EventKind, OutcomeEvents, RoundEvent};

use std::collections::VecDeque;

use tracing::debug;

use crate::core::RoundGeneration;
use crate::round::MatchOutcome;

/// FIFO buffer of round events.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<RoundEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the events of one outcome.
    pub fn push_outcome(&mut self, generation: RoundGeneration, outcome: &MatchOutcome) {
        self.events.extend(RoundEvent::from_outcome(generation, outcome));
    }

    /// Take every buffered event, oldest first.
    pub fn drain(&mut self) -> Vec<RoundEvent> {
        self.events.drain(..).collect()
    }

    /// Drop events of rounds older than `current`.
    pub fn retain_generation(&mut self, current: RoundGeneration) {
        let before = self.events.len();
        self.events.retain(|e| e.generation >= current);
        let dropped = before - self.events.len();
        if dropped > 0 {
            debug!(dropped, current = current.raw(), "dropped stale events");
        }
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
