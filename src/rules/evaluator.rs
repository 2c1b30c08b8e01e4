//! Match evaluation.
//!
//! The evaluator decides what a proposed match means for a definition.
//! It sees only whether the pair is correct and how many incorrect
//! attempts the definition has already absorbed; all state changes are
//! applied by the round controller.

use serde::{Deserialize, Serialize};

/// Decision for one proposed (term, definition) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// The term belongs to the definition.
    Correct,
    /// Wrong term; the definition stays open for another try.
    IncorrectRetry,
    /// Wrong term and the retry limit is reached; reveal the answer.
    IncorrectExhausted,
}

impl Decision {
    /// True for decisions that resolve the definition.
    #[must_use]
    pub const fn resolves(self) -> bool {
        matches!(self, Decision::Correct | Decision::IncorrectExhausted)
    }
}

/// Evaluate a proposed match.
///
/// `prior_attempts` is the number of incorrect attempts recorded before
/// this one. The attempt that brings the count to `max_attempts` is the
/// exhausting one.
///
/// ```
/// use rust_matchgame::rules::{evaluate, Decision};
///
/// assert_eq!(evaluate(true, 2, 3), Decision::Correct);
/// assert_eq!(evaluate(false, 1, 3), Decision::IncorrectRetry);
/// assert_eq!(evaluate(false, 2, 3), Decision::IncorrectExhausted);
/// ```
#[must_use]
pub const fn evaluate(is_correct: bool, prior_attempts: u32, max_attempts: u32) -> Decision {
    if is_correct {
        Decision::Correct
    } else if prior_attempts.saturating_add(1) < max_attempts {
        Decision::IncorrectRetry
    } else {
        Decision::IncorrectExhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_ignores_attempts() {
        for prior in 0..5 {
            assert_eq!(evaluate(true, prior, 3), Decision::Correct);
        }
    }

    #[test]
    fn test_standard_retry_limit() {
        assert_eq!(evaluate(false, 0, 3), Decision::IncorrectRetry);
        assert_eq!(evaluate(false, 1, 3), Decision::IncorrectRetry);
        assert_eq!(evaluate(false, 2, 3), Decision::IncorrectExhausted);
    }

    #[test]
    fn test_single_attempt_limit() {
        assert_eq!(evaluate(false, 0, 1), Decision::IncorrectExhausted);
    }

    #[test]
    fn test_prior_at_or_over_limit_exhausts() {
        assert_eq!(evaluate(false, 3, 3), Decision::IncorrectExhausted);
        assert_eq!(evaluate(false, u32::MAX, 3), Decision::IncorrectExhausted);
    }

    #[test]
    fn test_resolves() {
        assert!(Decision::Correct.resolves());
        assert!(Decision::IncorrectExhausted.resolves());
        assert!(!Decision::IncorrectRetry.resolves());
    }
}
