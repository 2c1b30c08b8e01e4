//! Round control: applying match attempts to round state.
//!
//! - [`attempt_match`]: the per-drop state transition over any `RoundState`
//! - [`RoundController`]: owner of the single live round
//! - [`MatchOutcome`]: what the presentation layer renders after a drop

mod controller;
mod outcome;

pub use controller::{attempt_match, RoundController};
pub use outcome::{IgnoreReason, MatchOutcome};
