//! Round controller.
//!
//! [`attempt_match`] is the whole state machine for one drop: it works on
//! any [`RoundState`] value, so independent rounds can be played side by
//! side. [`RoundController`] owns the single live round of a game screen,
//! hands out generations and reshuffles terms on every start.

use tracing::{debug, info};

use crate::core::{
    Error, GameRng, GameRngState, Question, QuestionId, QuestionSet, Result, RoundConfig, RoundGeneration,
    RoundState,
};
use crate::rules::{evaluate, Decision, RoundComplete};

use super::outcome::{IgnoreReason, MatchOutcome};

/// Process a proposed match of `term` onto `definition`.
///
/// Unknown ids and resolved tiles yield [`MatchOutcome::Ignored`] and
/// leave `state` untouched. Otherwise the evaluator decides and the state
/// is updated accordingly. The outcome that resolves the last open
/// definition carries the round summary; it is handed out only once.
pub fn attempt_match(
    state: &mut RoundState,
    config: &RoundConfig,
    term: &QuestionId,
    definition: &QuestionId,
) -> MatchOutcome {
    if !state.contains(definition) {
        return ignore(state, IgnoreReason::StaleReference(definition.clone()));
    }
    if !state.contains(term) {
        return ignore(state, IgnoreReason::StaleReference(term.clone()));
    }
    if state.is_resolved(definition) {
        return ignore(state, IgnoreReason::AlreadyResolved(definition.clone()));
    }
    // The term tile of a resolved definition has left the board.
    if state.is_resolved(term) {
        return ignore(state, IgnoreReason::AlreadyResolved(term.clone()));
    }

    let prior = state.attempts(definition).unwrap_or(0);
    let decision = evaluate(term == definition, prior, config.max_attempts);

    debug!(
        generation = state.generation().raw(),
        term = %term,
        definition = %definition,
        prior_attempts = prior,
        ?decision,
        "evaluated match"
    );

    match decision {
        Decision::Correct => {
            state.resolve(definition, true);
            MatchOutcome::Matched {
                definition: definition.clone(),
                term: term.clone(),
                completion: completion(state, config),
            }
        }
        Decision::IncorrectRetry => {
            let attempts = state.record_incorrect(definition);
            MatchOutcome::Rejected {
                definition: definition.clone(),
                term: term.clone(),
                attempts_remaining: config.max_attempts.saturating_sub(attempts),
            }
        }
        Decision::IncorrectExhausted => {
            state.record_incorrect(definition);
            state.resolve(definition, false);
            MatchOutcome::Revealed {
                definition: definition.clone(),
                correct_term: definition.clone(),
                attempted_term: term.clone(),
                completion: completion(state, config),
            }
        }
    }
}

fn ignore(state: &RoundState, reason: IgnoreReason) -> MatchOutcome {
    debug!(generation = state.generation().raw(), ?reason, "ignored match attempt");
    MatchOutcome::Ignored(reason)
}

fn completion(state: &mut RoundState, config: &RoundConfig) -> Option<RoundComplete> {
    if !state.take_completion() {
        return None;
    }

    let summary = RoundComplete::new(state.score(), state.total(), config.pass_threshold);
    info!(
        generation = state.generation().raw(),
        score = summary.score,
        total = summary.total,
        percentage = summary.percentage,
        passed = summary.passed,
        "round complete"
    );
    Some(summary)
}

/// Owner of the live round.
///
/// ## Example
///
/// ```
/// use rust_matchgame::core::{Question, QuestionId, RoundConfig};
/// use rust_matchgame::round::{MatchOutcome, RoundController};
///
/// let mut controller = RoundController::new(RoundConfig::new().with_seed(1)).unwrap();
/// controller
///     .start_round(vec![Question::new("q1", "Box", "Owned heap pointer")])
///     .unwrap();
///
/// let q1 = QuestionId::new("q1");
/// let outcome = controller.attempt_match(&q1, &q1);
///
/// assert!(matches!(outcome, MatchOutcome::Matched { .. }));
/// assert_eq!(outcome.completion().unwrap().percentage, 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct RoundController {
    config: RoundConfig,
    rng: GameRng,
    last_generation: RoundGeneration,
    questions: Option<QuestionSet>,
    round: Option<RoundState>,
}

impl RoundController {
    /// Create a controller with no live round.
    pub fn new(config: RoundConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a controller that shuffles with `rng`, ignoring `config.seed`.
    ///
    /// Pair with [`rng_state`](Self::rng_state) to resume a shuffle stream.
    pub fn with_rng(config: RoundConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            rng,
            last_generation: RoundGeneration::default(),
            questions: None,
            round: None,
        })
    }

    /// The configuration rounds are played with.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Position of the shuffle stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Start a round from raw question records.
    ///
    /// Fails with `InvalidInput` for an empty sequence or duplicate ids;
    /// the previous round, if any, stays live in that case.
    pub fn start_round(&mut self, questions: impl IntoIterator<Item = Question>) -> Result<&RoundState> {
        let set = QuestionSet::new(questions).map_err(Error::from)?;
        Ok(self.start_with_set(set))
    }

    /// Start a round from an already validated set.
    pub fn start_with_set(&mut self, questions: QuestionSet) -> &RoundState {
        let generation = self.last_generation.next();
        self.last_generation = generation;

        let order = self.rng.shuffled(questions.ids().cloned().collect());
        let state = RoundState::new(generation, questions.clone(), order);
        self.questions = Some(questions);

        info!(
            generation = generation.raw(),
            questions = state.total(),
            max_attempts = self.config.max_attempts,
            "round started"
        );
        self.round.insert(state)
    }

    /// Start over with the question set of the last round.
    ///
    /// Terms are reshuffled and a new generation is issued.
    pub fn restart_round(&mut self) -> Result<&RoundState> {
        let questions = self.questions.clone().ok_or(Error::NoRound)?;
        Ok(self.start_with_set(questions))
    }

    /// Retire the live round, returning its final state.
    pub fn end_round(&mut self) -> Option<RoundState> {
        let retired = self.round.take();
        if let Some(state) = &retired {
            info!(generation = state.generation().raw(), "round retired");
        }
        retired
    }

    /// The live round.
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Generation of the live round.
    #[must_use]
    pub fn generation(&self) -> Option<RoundGeneration> {
        self.round.as_ref().map(RoundState::generation)
    }

    /// Most recently issued generation, live or retired.
    #[must_use]
    pub fn last_generation(&self) -> RoundGeneration {
        self.last_generation
    }

    /// Check whether `generation` names the live round.
    #[must_use]
    pub fn is_current(&self, generation: RoundGeneration) -> bool {
        self.generation() == Some(generation)
    }

    /// Process a proposed match against the live round.
    pub fn attempt_match(&mut self, term: &QuestionId, definition: &QuestionId) -> MatchOutcome {
        match self.round.as_mut() {
            Some(state) => attempt_match(state, &self.config, term, definition),
            None => {
                debug!(term = %term, definition = %definition, "match attempt with no live round");
                MatchOutcome::Ignored(IgnoreReason::NoActiveRound)
            }
        }
    }
}
