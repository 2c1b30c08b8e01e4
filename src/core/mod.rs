//! Core types: questions, question sets, round state, RNG, configuration.
//!
//! Everything here is plain data with no knowledge of screens or timing.
//! The round controller and session build on these types.

pub mod config;
pub mod error;
pub mod question;
pub mod question_set;
pub mod rng;
pub mod state;

pub use config::{PresentationTimings, RoundConfig, MAX_ATTEMPTS, PASS_THRESHOLD};
pub use error::{Error, InvalidInput, Result};
pub use question::{Question, QuestionId};
pub use question_set::QuestionSet;
pub use rng::{GameRng, GameRngState};
pub use state::{RoundGeneration, RoundState};
