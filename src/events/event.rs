//! Round events for the presentation layer.
//!
//! A [`MatchOutcome`] describes one drop; events are what an adapter
//! renders. A resolving outcome that finishes the round expands into two
//! events: the resolution itself followed by `RoundComplete`.
//!
//! Every event carries the generation of the round that produced it, so
//! an adapter can discard events of a round it has already torn down.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{QuestionId, RoundGeneration};
use crate::round::MatchOutcome;
use crate::rules::RoundComplete;

/// What happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Pair accepted: mark the definition solved, remove the term tile.
    Matched { definition: QuestionId, term: QuestionId },

    /// Pair refused: flash the definition and the dragged term.
    Rejected {
        definition: QuestionId,
        term: QuestionId,
        attempts_remaining: u32,
    },

    /// Retries exhausted: show the correct term on the definition.
    Revealed {
        definition: QuestionId,
        correct_term: QuestionId,
    },

    /// Every definition is resolved.
    RoundComplete(RoundComplete),
}

/// An event tagged with its round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundEvent {
    /// Round that produced the event.
    pub generation: RoundGeneration,

    /// The event itself.
    pub kind: EventKind,
}

/// Events for one outcome. At most two: a resolution plus completion.
pub type OutcomeEvents = SmallVec<[RoundEvent; 2]>;

impl RoundEvent {
    /// Create a new event.
    #[must_use]
    pub fn new(generation: RoundGeneration, kind: EventKind) -> Self {
        Self { generation, kind }
    }

    /// Translate a match outcome into events.
    ///
    /// Ignored outcomes produce no events.
    #[must_use]
    pub fn from_outcome(generation: RoundGeneration, outcome: &MatchOutcome) -> OutcomeEvents {
        let mut events = OutcomeEvents::new();

        let kind = match outcome {
            MatchOutcome::Matched { definition, term, .. } => EventKind::Matched {
                definition: definition.clone(),
                term: term.clone(),
            },
            MatchOutcome::Rejected {
                definition,
                term,
                attempts_remaining,
            } => EventKind::Rejected {
                definition: definition.clone(),
                term: term.clone(),
                attempts_remaining: *attempts_remaining,
            },
            MatchOutcome::Revealed {
                definition,
                correct_term,
                ..
            } => EventKind::Revealed {
                definition: definition.clone(),
                correct_term: correct_term.clone(),
            },
            MatchOutcome::Ignored(_) => return events,
        };
        events.push(Self::new(generation, kind));

        if let Some(summary) = outcome.completion() {
            events.push(Self::new(generation, EventKind::RoundComplete(*summary)));
        }

        events
    }

    /// True for the completion event.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self.kind, EventKind::RoundComplete(_))
    }
}
