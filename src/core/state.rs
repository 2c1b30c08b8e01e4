//! Round state.
//!
//! ## RoundGeneration
//!
//! Identity of a round. Every start or restart gets a fresh generation,
//! and anything deferred (visual effects, late drops) is tagged with the
//! generation it belongs to so it can be discarded once that round is
//! retired.
//!
//! ## RoundState
//!
//! Everything that changes while a round is played:
//! - Remaining definitions and the resolved set
//! - Per-definition incorrect-attempt counters
//! - Score and reveal count
//! - Display order of the term tiles
//!
//! Uses `im` persistent data structures so snapshots are O(1).

use im::{HashMap as ImHashMap, HashSet as ImHashSet, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::InvalidInput;
use super::question::{Question, QuestionId};
use super::question_set::QuestionSet;

/// Round identity, strictly increasing per controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundGeneration(pub u64);

impl RoundGeneration {
    /// Create a new generation.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RoundGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// State of one round.
///
/// ## Invariants
///
/// - `remaining_count() == total() - resolved.len()`
/// - `score() + revealed_count() == resolved.len()`
/// - every question id has exactly one attempt counter
/// - `term_order` is a permutation of the question ids
///
/// Deserializing checks all of these and fails with
/// [`InvalidInput::InconsistentRound`] otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoundState")]
pub struct RoundState {
    generation: RoundGeneration,
    questions: QuestionSet,
    term_order: Vector<QuestionId>,
    attempts: ImHashMap<QuestionId, u32>,
    resolved: ImHashSet<QuestionId>,
    remaining: u32,
    score: u32,
    revealed: u32,
    completed: bool,
}

#[derive(Deserialize)]
struct RawRoundState {
    generation: RoundGeneration,
    questions: QuestionSet,
    term_order: Vector<QuestionId>,
    attempts: ImHashMap<QuestionId, u32>,
    resolved: ImHashSet<QuestionId>,
    remaining: u32,
    score: u32,
    revealed: u32,
    completed: bool,
}

fn inconsistent(reason: impl Into<String>) -> InvalidInput {
    InvalidInput::InconsistentRound(reason.into())
}

impl TryFrom<RawRoundState> for RoundState {
    type Error = InvalidInput;

    fn try_from(raw: RawRoundState) -> Result<Self, Self::Error> {
        let total = raw.questions.len();

        if let Some(id) = raw.resolved.iter().find(|id| !raw.questions.contains(id)) {
            return Err(inconsistent(format!("resolved id '{id}' is not in the question set")));
        }
        if raw.attempts.len() != total || raw.questions.ids().any(|id| !raw.attempts.contains_key(id)) {
            return Err(inconsistent("attempt counters do not match the question ids"));
        }

        let resolved = raw.resolved.len();
        if raw.remaining as usize != total - resolved {
            return Err(inconsistent(format!(
                "remaining is {} but {} definitions are open",
                raw.remaining,
                total - resolved
            )));
        }
        if u64::from(raw.score) + u64::from(raw.revealed) != resolved as u64 {
            return Err(inconsistent(format!(
                "score {} plus revealed {} does not equal {} resolved",
                raw.score, raw.revealed, resolved
            )));
        }

        let mut seen = FxHashSet::default();
        let permutation = raw.term_order.len() == total
            && raw
                .term_order
                .iter()
                .all(|id| raw.questions.contains(id) && seen.insert(id));
        if !permutation {
            return Err(inconsistent("term order is not a permutation of the question ids"));
        }

        if raw.completed && raw.remaining != 0 {
            return Err(inconsistent("completion reported with definitions still open"));
        }

        Ok(Self {
            generation: raw.generation,
            questions: raw.questions,
            term_order: raw.term_order,
            attempts: raw.attempts,
            resolved: raw.resolved,
            remaining: raw.remaining,
            score: raw.score,
            revealed: raw.revealed,
            completed: raw.completed,
        })
    }
}

impl RoundState {
    /// Create a fresh round.
    ///
    /// `term_order` is the on-screen order of the term tiles and must be
    /// a permutation of the set's ids.
    #[must_use]
    pub fn new(generation: RoundGeneration, questions: QuestionSet, term_order: Vec<QuestionId>) -> Self {
        debug_assert_eq!(term_order.len(), questions.len());

        let attempts = questions.ids().map(|id| (id.clone(), 0)).collect();
        let remaining = questions.len() as u32;

        Self {
            generation,
            questions,
            term_order: term_order.into_iter().collect(),
            attempts,
            resolved: ImHashSet::new(),
            remaining,
            score: 0,
            revealed: 0,
            completed: false,
        }
    }

    /// Create a round with terms in load order.
    #[must_use]
    pub fn unshuffled(generation: RoundGeneration, questions: QuestionSet) -> Self {
        let order = questions.ids().cloned().collect();
        Self::new(generation, questions, order)
    }

    // === Identity ===

    /// The round's generation.
    #[must_use]
    pub fn generation(&self) -> RoundGeneration {
        self.generation
    }

    /// The question set, in load order.
    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Look up a question.
    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }

    /// Check if an ID belongs to this round.
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.attempts.contains_key(id)
    }

    // === Counters ===

    /// Number of questions.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Definitions not yet matched or revealed.
    #[must_use]
    pub fn remaining_count(&self) -> u32 {
        self.remaining
    }

    /// Correct matches so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Definitions auto-revealed after exhausting their attempts.
    #[must_use]
    pub fn revealed_count(&self) -> u32 {
        self.revealed
    }

    /// Incorrect attempts recorded against a definition.
    #[must_use]
    pub fn attempts(&self, id: &QuestionId) -> Option<u32> {
        self.attempts.get(id).copied()
    }

    /// True once every definition is resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// True once the completion signal has been handed out.
    #[must_use]
    pub fn completion_reported(&self) -> bool {
        self.completed
    }

    // === Tiles ===

    /// Check if a definition has been matched or revealed.
    #[must_use]
    pub fn is_resolved(&self, id: &QuestionId) -> bool {
        self.resolved.contains(id)
    }

    /// Check if a definition is still interactive.
    #[must_use]
    pub fn is_open(&self, id: &QuestionId) -> bool {
        self.contains(id) && !self.is_resolved(id)
    }

    /// Open definitions in load order.
    pub fn open_definitions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| !self.resolved.contains(&q.id))
    }

    /// Term tiles still on screen, in display order.
    pub fn visible_terms(&self) -> impl Iterator<Item = &QuestionId> {
        self.term_order.iter().filter(move |id| !self.resolved.contains(*id))
    }

    /// Display order of all term tiles at round start.
    #[must_use]
    pub fn term_order(&self) -> &Vector<QuestionId> {
        &self.term_order
    }

    // === Mutation (round controller only) ===

    /// Record one incorrect attempt; returns the new count.
    pub(crate) fn record_incorrect(&mut self, id: &QuestionId) -> u32 {
        let count = self.attempts.entry(id.clone()).or_insert(0);
        *count += 1;
        *count
    }

    /// Resolve a definition, crediting the score when `credited`.
    ///
    /// Returns false if the definition was already resolved.
    pub(crate) fn resolve(&mut self, id: &QuestionId, credited: bool) -> bool {
        if self.resolved.insert(id.clone()).is_some() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if credited {
            self.score += 1;
        } else {
            self.revealed += 1;
        }
        true
    }

    /// Mark the completion signal as delivered.
    ///
    /// Returns true only for the first call on a completed round.
    pub(crate) fn take_completion(&mut self) -> bool {
        if self.remaining == 0 && !self.completed {
            self.completed = true;
            true
        } else {
            false
        }
    }
}
