//! # rust-matchgame
//!
//! Engine for term/definition matching games: the player drags a term
//! onto the definition it belongs to until every definition is resolved.
//!
//! ## Design Principles
//!
//! 1. **Outcomes, Not Exceptions**: A wrong answer, a late drop from a torn
//!    down round, or a drop on a solved tile are all ordinary
//!    [`MatchOutcome`]s. Errors are reserved for bad input and invalid
//!    screen transitions.
//!
//! 2. **Rendering Stays Outside**: The engine never draws. It reports
//!    outcomes, events and timed presentation effects, and a front end
//!    renders them.
//!
//! 3. **Deterministic When Seeded**: Term shuffling uses a seedable
//!    ChaCha RNG, and presentation delays run on a caller-driven clock.
//!
//! ## Architecture
//!
//! - **Generations**: Every round start issues a new [`RoundGeneration`].
//!   Events and effects carry it, and anything tagged with a retired
//!   generation is dropped.
//!
//! - **Persistent Data Structures**: Round state uses `im-rs`, so a round
//!   can be snapshotted or played out independently at no cost.
//!
//! ## Modules
//!
//! - `core`: Questions, question sets, round state, RNG, configuration, errors
//! - `rules`: Match evaluation and scoring
//! - `round`: Round controller and match outcomes
//! - `events`: Generation-tagged round events
//! - `effects`: Delayed, cancellable presentation effects
//! - `catalog`: Game catalog and question file loading
//! - `session`: Home, game and completion screen flow

pub mod core;
pub mod rules;
pub mod round;
pub mod events;
pub mod effects;
pub mod catalog;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Error, InvalidInput, Result,
    Question, QuestionId, QuestionSet,
    GameRng, GameRngState,
    PresentationTimings, RoundConfig,
    RoundGeneration, RoundState,
};

pub use crate::rules::{evaluate, percentage, passed, Decision, RoundComplete, Verdict};

pub use crate::round::{attempt_match, IgnoreReason, MatchOutcome, RoundController};

pub use crate::events::{EventKind, EventQueue, RoundEvent};

pub use crate::effects::{EffectId, EffectScheduler, PresentationEffect, ScheduledEffect};

pub use crate::catalog::{
    parse_question_file, Catalog, CatalogEntry,
    DirectorySource, InMemorySource, QuestionSource,
};

pub use crate::session::{ScreenFsmState, Session};
