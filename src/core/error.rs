//! Error types for the matching engine.
//!
//! Only conditions that stop an operation are errors. A wrong answer is a
//! normal [`MatchOutcome`](crate::round::MatchOutcome), and attempts against
//! resolved or unknown tiles are reported as `Ignored` outcomes instead.

use thiserror::Error;

use super::question::QuestionId;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Why a question set or round snapshot was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("question set is empty")]
    EmptyQuestionSet,

    #[error("duplicate question id '{0}'")]
    DuplicateId(QuestionId),

    #[error("inconsistent round snapshot: {0}")]
    InconsistentRound(String),
}

/// Errors returned by the engine, catalog and session.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("could not load '{file}': {message}")]
    Source { file: String, message: String },

    #[error("no round has been started")]
    NoRound,

    #[error("game '{0}' is not listed in the catalog")]
    UnknownGame(String),

    #[error("cannot {action} while on the {screen} screen")]
    InvalidTransition { screen: String, action: String },
}

impl Error {
    /// True when the error was caused by a bad question set.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}
