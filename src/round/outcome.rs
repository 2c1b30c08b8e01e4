//! Outcomes of a proposed match.

use serde::{Deserialize, Serialize};

use crate::core::QuestionId;
use crate::rules::RoundComplete;

/// Why a match attempt changed nothing.
///
/// These are not errors: a late drop from a torn-down round or a drop on
/// an already-solved tile is expected and intentionally inert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No round is live.
    NoActiveRound,
    /// The id does not belong to the current round.
    StaleReference(QuestionId),
    /// The tile was already matched or revealed.
    AlreadyResolved(QuestionId),
}

/// Result of [`attempt_match`](super::attempt_match).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Correct pair; the definition is resolved and credited.
    Matched {
        definition: QuestionId,
        term: QuestionId,
        completion: Option<RoundComplete>,
    },

    /// Wrong pair; the definition stays open.
    Rejected {
        definition: QuestionId,
        term: QuestionId,
        attempts_remaining: u32,
    },

    /// Wrong pair on the last allowed attempt; the answer is disclosed
    /// without credit.
    Revealed {
        definition: QuestionId,
        correct_term: QuestionId,
        attempted_term: QuestionId,
        completion: Option<RoundComplete>,
    },

    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MatchOutcome {
    /// The round summary, if this outcome finished the round.
    #[must_use]
    pub fn completion(&self) -> Option<&RoundComplete> {
        match self {
            MatchOutcome::Matched { completion, .. } | MatchOutcome::Revealed { completion, .. } => {
                completion.as_ref()
            }
            _ => None,
        }
    }

    /// The definition this outcome concerns, unless ignored.
    #[must_use]
    pub fn definition(&self) -> Option<&QuestionId> {
        match self {
            MatchOutcome::Matched { definition, .. }
            | MatchOutcome::Rejected { definition, .. }
            | MatchOutcome::Revealed { definition, .. } => Some(definition),
            MatchOutcome::Ignored(_) => None,
        }
    }

    /// True if the outcome resolved its definition.
    #[must_use]
    pub fn resolves(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. } | MatchOutcome::Revealed { .. })
    }

    /// True if nothing changed.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, MatchOutcome::Ignored(_))
    }

    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            MatchOutcome::Matched { .. } => "matched",
            MatchOutcome::Rejected { .. } => "rejected",
            MatchOutcome::Revealed { .. } => "revealed",
            MatchOutcome::Ignored(_) => "ignored",
        }
    }
}
