//! Round controller integration tests.
//!
//! These play whole rounds through the controller and check the score,
//! the completion summary and how late or repeated drops are handled.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::span::{Attributes, Id, Record};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};

use rust_matchgame::catalog::{Catalog, CatalogEntry, InMemorySource};
use rust_matchgame::core::{Error, InvalidInput, Question, QuestionId, RoundConfig};
use rust_matchgame::events::{EventKind, EventQueue};
use rust_matchgame::round::{IgnoreReason, MatchOutcome, RoundController};
use rust_matchgame::session::Session;

fn questions(n: usize) -> Vec<Question> {
    (1..=n)
        .map(|i| Question::new(format!("q{i}"), format!("term {i}"), format!("definition {i}")))
        .collect()
}

fn id(s: &str) -> QuestionId {
    QuestionId::new(s)
}

fn controller() -> RoundController {
    RoundController::new(RoundConfig::new().with_seed(42)).unwrap()
}

/// Four correct answers and one exhausted definition pass at 80%.
#[test]
fn test_round_with_one_revealed_answer() {
    let mut ctl = controller();
    ctl.start_round(questions(5)).unwrap();

    // Three wrong drops on q5 reveal it
    let first = ctl.attempt_match(&id("q1"), &id("q5"));
    assert!(matches!(first, MatchOutcome::Rejected { attempts_remaining: 2, .. }));
    let second = ctl.attempt_match(&id("q1"), &id("q5"));
    assert!(matches!(second, MatchOutcome::Rejected { attempts_remaining: 1, .. }));
    let third = ctl.attempt_match(&id("q1"), &id("q5"));
    match third {
        MatchOutcome::Revealed {
            correct_term,
            attempted_term,
            completion,
            ..
        } => {
            assert_eq!(correct_term, id("q5"));
            assert_eq!(attempted_term, id("q1"));
            assert!(completion.is_none());
        }
        other => panic!("expected reveal, got {other:?}"),
    }

    let mut completions = Vec::new();
    for i in 1..=4 {
        let q = id(&format!("q{i}"));
        let outcome = ctl.attempt_match(&q, &q);
        assert!(matches!(outcome, MatchOutcome::Matched { .. }));
        completions.extend(outcome.completion().copied());
    }

    assert_eq!(completions.len(), 1, "completion must be reported exactly once");
    let summary = completions[0];
    assert_eq!(summary.score, 4);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.percentage_label(), "80.00");
    assert!(summary.passed);
    assert_eq!(summary.verdict().message(), "Good job!");

    let round = ctl.round().unwrap();
    assert_eq!(round.score(), 4);
    assert_eq!(round.revealed_count(), 1);
    assert_eq!(round.remaining_count(), 0);
    assert!(round.is_complete());
}

/// Two misses followed by the right term still earn the point.
#[test]
fn test_correct_after_two_misses() {
    let mut ctl = controller();
    ctl.start_round(questions(3)).unwrap();

    ctl.attempt_match(&id("q2"), &id("q1"));
    ctl.attempt_match(&id("q3"), &id("q1"));
    assert_eq!(ctl.round().unwrap().attempts(&id("q1")), Some(2));

    let outcome = ctl.attempt_match(&id("q1"), &id("q1"));
    assert!(matches!(outcome, MatchOutcome::Matched { .. }));
    assert_eq!(ctl.round().unwrap().score(), 1);
}

/// A failing round reports "Try again!".
#[test]
fn test_failing_round() {
    let config = RoundConfig::new().with_seed(7).with_max_attempts(1);
    let mut ctl = RoundController::new(config).unwrap();
    ctl.start_round(questions(3)).unwrap();

    // With a single attempt every miss reveals immediately
    assert!(matches!(ctl.attempt_match(&id("q2"), &id("q1")), MatchOutcome::Revealed { .. }));
    assert!(matches!(ctl.attempt_match(&id("q3"), &id("q2")), MatchOutcome::Revealed { .. }));

    let last = ctl.attempt_match(&id("q3"), &id("q3"));
    let summary = last.completion().copied().unwrap();

    assert_eq!(summary.percentage_label(), "33.33");
    assert!(!summary.passed);
    assert_eq!(summary.verdict().message(), "Try again!");
}

#[test]
fn test_empty_question_set_rejected() {
    let mut ctl = controller();
    let result = ctl.start_round(Vec::new());

    assert!(matches!(
        result,
        Err(Error::InvalidInput(InvalidInput::EmptyQuestionSet))
    ));
    assert!(ctl.round().is_none());
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut ctl = controller();
    let result = ctl.start_round(vec![
        Question::new("a", "one", "first"),
        Question::new("a", "two", "second"),
    ]);

    assert!(matches!(
        result,
        Err(Error::InvalidInput(InvalidInput::DuplicateId(dup))) if dup == id("a")
    ));
}

/// Drops from a previous round reference ids that no longer exist.
#[test]
fn test_drop_from_previous_round_ignored() {
    let mut ctl = controller();
    ctl.start_round(questions(2)).unwrap();
    ctl.start_round(vec![Question::new("x1", "Arc", "Atomic shared ownership")])
        .unwrap();

    let outcome = ctl.attempt_match(&id("q1"), &id("q1"));
    assert_eq!(
        outcome,
        MatchOutcome::Ignored(IgnoreReason::StaleReference(id("q1")))
    );
}

#[test]
fn test_drop_on_solved_definition_ignored() {
    let mut ctl = controller();
    ctl.start_round(questions(2)).unwrap();
    ctl.attempt_match(&id("q1"), &id("q1"));

    let before = ctl.round().unwrap().clone();
    let outcome = ctl.attempt_match(&id("q2"), &id("q1"));

    assert_eq!(
        outcome,
        MatchOutcome::Ignored(IgnoreReason::AlreadyResolved(id("q1")))
    );
    assert_eq!(ctl.round().unwrap(), &before);
}

#[test]
fn test_restart_resets_round() {
    let mut ctl = controller();
    let first = ctl.start_round(questions(4)).unwrap().generation();
    ctl.attempt_match(&id("q1"), &id("q1"));
    ctl.attempt_match(&id("q3"), &id("q2"));

    let round = ctl.restart_round().unwrap();
    assert!(round.generation() > first);
    assert_eq!(round.score(), 0);
    assert_eq!(round.remaining_count(), 4);
    assert_eq!(round.attempts(&id("q2")), Some(0));
}

#[test]
fn test_restart_without_round() {
    let mut ctl = controller();
    assert!(matches!(ctl.restart_round(), Err(Error::NoRound)));
}

/// Same seed, same term order.
#[test]
fn test_seeded_shuffle_is_reproducible() {
    let mut a = controller();
    let mut b = controller();

    let order_a: Vec<_> = a.start_round(questions(10)).unwrap().term_order().iter().cloned().collect();
    let order_b: Vec<_> = b.start_round(questions(10)).unwrap().term_order().iter().cloned().collect();

    assert_eq!(order_a, order_b);
}

#[test]
fn test_events_follow_outcomes() {
    let mut ctl = controller();
    let generation = ctl.start_round(questions(1)).unwrap().generation();
    let mut queue = EventQueue::new();

    let outcome = ctl.attempt_match(&id("q1"), &id("q1"));
    queue.push_outcome(generation, &outcome);

    let events = queue.drain();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0].kind, EventKind::Matched { .. }));
    assert!(events[1].is_completion());
    assert!(events.iter().all(|e| e.generation == generation));
}

/// Counts events logged at WARN or above.
struct WarnCounter(Arc<AtomicUsize>);

impl Subscriber for WarnCounter {
    fn register_callsite(&self, _: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let level = *event.metadata().level();
        if level == Level::WARN || level == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

/// Late drops and drops on solved tiles are routine and log below WARN.
#[test]
fn test_ignored_drops_do_not_warn() {
    let warnings = Arc::new(AtomicUsize::new(0));

    tracing::subscriber::with_default(WarnCounter(warnings.clone()), || {
        let mut ctl = controller();
        ctl.start_round(questions(2)).unwrap();
        ctl.attempt_match(&id("q1"), &id("q1"));

        assert!(ctl.attempt_match(&id("q1"), &id("q1")).is_ignored());
        assert!(ctl.attempt_match(&id("q2"), &id("q1")).is_ignored());
        assert!(ctl.attempt_match(&id("old"), &id("q2")).is_ignored());

        ctl.end_round();
        assert!(ctl.attempt_match(&id("q2"), &id("q2")).is_ignored());

        let catalog = Catalog::new(vec![CatalogEntry::new("Pointers", "p.json")]);
        let mut session = Session::new(catalog, InMemorySource::new(), RoundConfig::new()).unwrap();
        assert!(session.attempt_match(&id("q1"), &id("q1")).is_ignored());
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 0);
}
