//! Game rules: match evaluation and scoring.
//!
//! Both halves are pure functions over plain values:
//! - [`evaluate`] decides accept / retry / reveal for one proposed match
//! - [`percentage`], [`passed`] and [`RoundComplete`] score a finished round
//!
//! The round controller applies their decisions; nothing here touches
//! round state.

pub mod evaluator;
pub mod scoring;

pub use evaluator::{evaluate, Decision};
pub use scoring::{passed, passed_with, percentage, RoundComplete, Verdict};
