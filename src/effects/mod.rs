//! Deferred presentation effects.
//!
//! Some visual changes happen a moment after a drop: a solved term fades
//! before it disappears, an incorrect highlight flashes for a second, and
//! the completion screen appears after the last tile settles. These are
//! modelled as scheduled effects tagged with the round generation.
//!
//! Starting, restarting or leaving a round retires its generation. Effects
//! of a retired round are dropped, so a callback from an old round can
//! never reach the next one.
//!
//! ## Example Usage
//!
//! ```
//! use rust_matchgame::core::{PresentationTimings, QuestionId, RoundGeneration};
//! use rust_matchgame::effects::{EffectScheduler, PresentationEffect};
//!
//! let mut scheduler = EffectScheduler::new(PresentationTimings::default());
//! let old_round = RoundGeneration::new(1);
//!
//! scheduler.schedule(old_round, 500, PresentationEffect::RemoveTerm {
//!     term: QuestionId::new("q1"),
//! });
//!
//! // Player hits "try again" before the fade finishes
//! scheduler.invalidate(old_round.next());
//! assert!(scheduler.advance(1000).is_empty());
//! ```

mod effect;
mod scheduler;

pub use effect::PresentationEffect;
pub use scheduler::{EffectId, EffectScheduler, ScheduledEffect};
