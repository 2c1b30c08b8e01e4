//! Screen flow around a round.
//!
//! A [`Session`] is what a front end talks to. It picks games from the
//! catalog, loads their question files, drives the round controller, and
//! moves between the home, game and completion screens.
//!
//! ## Screens
//!
//! ```text
//! Home --start_game--> Playing --(completion effect due)--> Completed
//!   ^                     |                                   |
//!   +------back_home------+<-------------retry----------------+
//!   +-------------------------------back_home-----------------+
//! ```
//!
//! The switch to `Completed` happens when the delayed `ShowCompletion`
//! effect is released by [`Session::tick`], not at the moment the last
//! definition is resolved.
//!
//! ## Example
//!
//! ```
//! use rust_matchgame::catalog::{Catalog, CatalogEntry, InMemorySource};
//! use rust_matchgame::core::{QuestionId, RoundConfig};
//! use rust_matchgame::session::{ScreenFsmState, Session};
//!
//! let catalog = Catalog::new(vec![CatalogEntry::new("Borrowing", "borrow.json")]);
//! let source = InMemorySource::new().with_file(
//!     "borrow.json",
//!     r#"{"questions": [{"id": "q1", "word": "&mut", "definition": "Exclusive borrow"}]}"#,
//! );
//!
//! let mut session = Session::new(catalog, source, RoundConfig::new().with_seed(7)).unwrap();
//! session.start_game("borrow.json").unwrap();
//!
//! let q1 = QuestionId::new("q1");
//! session.attempt_match(&q1, &q1);
//! session.tick(500);
//!
//! assert_eq!(session.screen(), &ScreenFsmState::Completed);
//! assert_eq!(session.summary().unwrap().verdict().message(), "Good job!");
//! ```

mod screen;

pub use screen::{ScreenFsm, ScreenFsmInput, ScreenFsmState};

use rust_fsm::StateMachine;
use tracing::{debug, info, warn};

use crate::catalog::{parse_question_file, Catalog, QuestionSource};
use crate::core::{Error, QuestionId, Result, RoundConfig, RoundGeneration, RoundState};
use crate::effects::{EffectScheduler, PresentationEffect};
use crate::events::{EventQueue, RoundEvent};
use crate::round::{IgnoreReason, MatchOutcome, RoundController};
use crate::rules::RoundComplete;

/// A player's session: catalog, current round and screen.
///
/// Every drop that changes the round buffers its [`RoundEvent`]s until
/// [`drain_events`](Self::drain_events) is called. Starting, retrying or
/// leaving a round discards the buffer, but within one round it only
/// shrinks when drained, so an adapter that reads events must drain them
/// after each drop or tick.
pub struct Session<S: QuestionSource> {
    catalog: Catalog,
    source: S,
    controller: RoundController,
    effects: EffectScheduler,
    events: EventQueue,
    fsm: StateMachine<ScreenFsm>,
    selected: Option<String>,
    summary: Option<RoundComplete>,
}

impl<S: QuestionSource> Session<S> {
    /// Create a session on the home screen.
    ///
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(catalog: Catalog, source: S, config: RoundConfig) -> Result<Self> {
        let effects = EffectScheduler::new(config.timings);
        let controller = RoundController::new(config)?;

        Ok(Self {
            catalog,
            source,
            controller,
            effects,
            events: EventQueue::new(),
            fsm: StateMachine::default(),
            selected: None,
            summary: None,
        })
    }

    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> &ScreenFsmState {
        self.fsm.state()
    }

    /// Games offered on the home screen.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// File of the game being played or just finished.
    #[must_use]
    pub fn selected_game(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The live round.
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.controller.round()
    }

    /// Summary shown on the completion screen.
    #[must_use]
    pub fn summary(&self) -> Option<&RoundComplete> {
        self.summary.as_ref()
    }

    /// Number of effects waiting on the clock.
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.effects.pending_count()
    }

    /// Load a game from the catalog and start playing it.
    ///
    /// Only allowed from the home screen. Nothing changes if the game is
    /// unknown, its file cannot be loaded or its question set is invalid.
    pub fn start_game(&mut self, file: &str) -> Result<&RoundState> {
        let entry = self
            .catalog
            .get(file)
            .ok_or_else(|| Error::UnknownGame(file.to_string()))?;
        let title = entry.title.clone();

        let contents = self.source.load(file)?;
        let questions = parse_question_file(&contents)?;

        self.transition(ScreenFsmInput::StartGame)?;
        info!(game = %title, file, "game selected");

        self.selected = Some(file.to_string());
        self.summary = None;

        let generation = self.controller.start_with_set(questions).generation();
        self.retire_before(generation);
        self.live_round()
    }

    /// Drop a term onto a definition.
    ///
    /// Outside the game screen this is ignored, like any other late drop.
    pub fn attempt_match(&mut self, term: &QuestionId, definition: &QuestionId) -> MatchOutcome {
        if self.screen() != &ScreenFsmState::Playing {
            debug!(screen = %self.screen(), "match attempt outside the game screen");
            return MatchOutcome::Ignored(IgnoreReason::NoActiveRound);
        }

        let outcome = self.controller.attempt_match(term, definition);
        if let Some(generation) = self.controller.generation() {
            self.events.push_outcome(generation, &outcome);
            self.effects.schedule_for_outcome(generation, &outcome);
        }
        outcome
    }

    /// Advance the presentation clock and return the effects to render.
    ///
    /// A due completion effect switches to the completion screen.
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<PresentationEffect> {
        let due = self.effects.advance(elapsed_ms);
        let mut rendered = Vec::with_capacity(due.len());

        for scheduled in due {
            if let PresentationEffect::ShowCompletion(summary) = &scheduled.effect {
                if self.screen() == &ScreenFsmState::Playing {
                    if let Err(error) = self.transition(ScreenFsmInput::RoundFinished) {
                        warn!(%error, "completion effect could not switch screens");
                        continue;
                    }
                    info!(
                        score = summary.score,
                        total = summary.total,
                        percentage = %summary.percentage_label(),
                        "completion screen shown"
                    );
                    self.summary = Some(*summary);
                }
            }
            rendered.push(scheduled.effect);
        }

        rendered
    }

    /// Play the same game again with freshly shuffled terms.
    ///
    /// Only allowed from the completion screen.
    pub fn retry(&mut self) -> Result<&RoundState> {
        self.transition(ScreenFsmInput::Retry)?;
        self.summary = None;

        let generation = self.controller.restart_round()?.generation();
        self.retire_before(generation);
        self.live_round()
    }

    /// Leave the game or completion screen for the home screen.
    ///
    /// The round is torn down and its pending effects are cancelled.
    pub fn back_home(&mut self) -> Result<()> {
        self.transition(ScreenFsmInput::BackHome)?;

        self.controller.end_round();
        self.retire_before(self.controller.last_generation().next());
        self.selected = None;
        self.summary = None;
        Ok(())
    }

    /// Number of round events waiting to be drained.
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Take the round events produced since the last call.
    ///
    /// Ignored drops add nothing; every other drop adds one event, and the
    /// last resolution adds the completion event.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        self.events.drain()
    }

    fn transition(&mut self, input: ScreenFsmInput) -> Result<()> {
        self.fsm.consume(&input).map_err(|_| Error::InvalidTransition {
            screen: self.fsm.state().to_string(),
            action: input.action().to_string(),
        })?;
        Ok(())
    }

    fn retire_before(&mut self, generation: RoundGeneration) {
        self.effects.invalidate(generation);
        self.events.retain_generation(generation);
    }

    fn live_round(&self) -> Result<&RoundState> {
        self.controller.round().ok_or(Error::NoRound)
    }
}
