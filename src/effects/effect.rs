//! Presentation effect definitions.

use serde::{Deserialize, Serialize};

use crate::core::QuestionId;
use crate::rules::RoundComplete;

/// A deferred visual change.
///
/// Effects never touch round state; they only tell the adapter what to
/// redraw once their delay has elapsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PresentationEffect {
    /// A resolved term tile has finished fading and can be removed.
    RemoveTerm { term: QuestionId },

    /// Clear the incorrect highlight on a definition and the dragged term.
    ClearIncorrect {
        definition: QuestionId,
        term: QuestionId,
    },

    /// Switch to the completion screen.
    ShowCompletion(RoundComplete),
}

impl PresentationEffect {
    /// True for the completion effect.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(self, PresentationEffect::ShowCompletion(_))
    }
}
