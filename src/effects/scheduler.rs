//! Deferred presentation effect scheduling.
//!
//! Effects are queued with a delay on a logical millisecond clock and
//! released by [`EffectScheduler::advance`]. The caller drives the clock,
//! so there are no timers or threads and tests are fully deterministic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{PresentationTimings, RoundGeneration};
use crate::round::MatchOutcome;

use super::effect::PresentationEffect;

/// Handle for cancelling a scheduled effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u64);

impl EffectId {
    /// Create a new effect ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// An effect waiting for its due time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    /// Handle returned by `schedule`.
    pub id: EffectId,
    /// Round the effect belongs to.
    pub generation: RoundGeneration,
    /// Clock time at which the effect is released.
    pub due_at_ms: u64,
    /// What to render.
    pub effect: PresentationEffect,
}

/// Scheduler for generation-tagged presentation effects.
///
/// ## Behavior
///
/// - `schedule()`: queues an effect `delay_ms` after the current clock
/// - `advance()`: moves the clock and releases due effects, oldest first
/// - `invalidate()`: retires every round older than the given generation;
///   their pending effects are dropped and later scheduling is refused
#[derive(Clone, Debug, Default)]
pub struct EffectScheduler {
    timings: PresentationTimings,
    pending: Vec<ScheduledEffect>,
    now_ms: u64,
    next_id: u64,
    current: RoundGeneration,
}

impl EffectScheduler {
    /// Create a scheduler with the given delays.
    #[must_use]
    pub fn new(timings: PresentationTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Current clock time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Oldest generation still accepted.
    #[must_use]
    pub fn current_generation(&self) -> RoundGeneration {
        self.current
    }

    /// Queue an effect.
    ///
    /// Returns `None` when `generation` has already been retired.
    pub fn schedule(
        &mut self,
        generation: RoundGeneration,
        delay_ms: u64,
        effect: PresentationEffect,
    ) -> Option<EffectId> {
        if generation < self.current {
            warn!(
                generation = generation.raw(),
                current = self.current.raw(),
                ?effect,
                "refused effect for retired round"
            );
            return None;
        }

        let id = EffectId::new(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledEffect {
            id,
            generation,
            due_at_ms: self.now_ms.saturating_add(delay_ms),
            effect,
        });
        Some(id)
    }

    /// Queue the visual follow-ups of one match outcome.
    ///
    /// - matched or revealed: the resolved term fades out, then is removed
    /// - rejected: the incorrect highlight is cleared after the flash
    /// - round finished: the completion screen is shown after a pause
    pub fn schedule_for_outcome(
        &mut self,
        generation: RoundGeneration,
        outcome: &MatchOutcome,
    ) -> SmallVec<[EffectId; 2]> {
        let timings = self.timings;
        let mut ids = SmallVec::new();

        let first = match outcome {
            MatchOutcome::Matched { term, .. } => Some((
                timings.fade_out_ms,
                PresentationEffect::RemoveTerm { term: term.clone() },
            )),
            MatchOutcome::Revealed { correct_term, .. } => Some((
                timings.fade_out_ms,
                PresentationEffect::RemoveTerm {
                    term: correct_term.clone(),
                },
            )),
            MatchOutcome::Rejected { definition, term, .. } => Some((
                timings.incorrect_flash_ms,
                PresentationEffect::ClearIncorrect {
                    definition: definition.clone(),
                    term: term.clone(),
                },
            )),
            MatchOutcome::Ignored(_) => None,
        };

        if let Some((delay, effect)) = first {
            ids.extend(self.schedule(generation, delay, effect));
        }
        if let Some(summary) = outcome.completion() {
            ids.extend(self.schedule(
                generation,
                timings.completion_delay_ms,
                PresentationEffect::ShowCompletion(*summary),
            ));
        }

        ids
    }

    /// Advance the clock and release every effect that became due.
    ///
    /// Effects come out ordered by due time, then by scheduling order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ScheduledEffect> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;
        let current = self.current;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|e| e.due_at_ms <= now);
        self.pending = waiting;

        due.retain(|e| e.generation >= current);
        due.sort_by_key(|e| (e.due_at_ms, e.id));
        due
    }

    /// Retire all rounds older than `generation`.
    pub fn invalidate(&mut self, generation: RoundGeneration) {
        if generation > self.current {
            self.current = generation;
        }

        let before = self.pending.len();
        let current = self.current;
        self.pending.retain(|e| e.generation >= current);

        let dropped = before - self.pending.len();
        if dropped > 0 {
            debug!(dropped, current = current.raw(), "cancelled stale effects");
        }
    }

    /// Cancel one effect. Returns false if it was not pending.
    pub fn cancel(&mut self, id: EffectId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != id);
        self.pending.len() != before
    }

    /// Number of pending effects.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
