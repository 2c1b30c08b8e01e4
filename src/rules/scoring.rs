//! Scoring and completion verdicts.

use serde::{Deserialize, Serialize};

use crate::core::config::PASS_THRESHOLD;

/// Percentage of `score` over `total`, rounded to two decimals.
///
/// `total` must be non-zero; question sets are never empty, so a round
/// always has at least one question.
///
/// ```
/// use rust_matchgame::rules::percentage;
///
/// assert_eq!(percentage(4, 5), 80.0);
/// assert_eq!(percentage(2, 3), 66.67);
/// ```
#[must_use]
pub fn percentage(score: u32, total: u32) -> f64 {
    debug_assert!(total > 0, "percentage of an empty round");
    let raw = f64::from(score) / f64::from(total) * 100.0;
    (raw * 100.0).round() / 100.0
}

/// True when `percentage` meets the standard threshold of 70.
#[must_use]
pub fn passed(percentage: f64) -> bool {
    passed_with(percentage, PASS_THRESHOLD)
}

/// True when `percentage` meets `threshold`.
#[must_use]
pub fn passed_with(percentage: f64, threshold: f64) -> bool {
    percentage >= threshold
}

/// Completion verdict shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    /// Verdict for a pass flag.
    #[must_use]
    pub const fn from_passed(passed: bool) -> Self {
        if passed {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    /// Message for the completion screen.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Verdict::Passed => "Good job!",
            Verdict::Failed => "Try again!",
        }
    }
}

/// Final result of a round, attached to the last resolving outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundComplete {
    /// Correct matches.
    pub score: u32,
    /// Questions in the round.
    pub total: u32,
    /// `score / total * 100`, two decimals.
    pub percentage: f64,
    /// Whether `percentage` met the pass threshold.
    pub passed: bool,
}

impl RoundComplete {
    /// Summarize a finished round.
    #[must_use]
    pub fn new(score: u32, total: u32, threshold: f64) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            passed: passed_with(percentage, threshold),
        }
    }

    /// Verdict for the completion screen.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_passed(self.passed)
    }

    /// Percentage formatted the way the completion screen shows it.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.2}", self.percentage)
    }
}
