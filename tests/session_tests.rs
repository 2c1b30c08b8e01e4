//! Session integration tests.
//!
//! These drive the full screen flow from a catalog on disk and check that
//! delayed effects of a torn-down round never surface in the next one.

use std::path::PathBuf;

use rust_matchgame::catalog::{Catalog, DirectorySource, InMemorySource};
use rust_matchgame::core::{Error, PresentationTimings, QuestionId, RoundConfig};
use rust_matchgame::effects::PresentationEffect;
use rust_matchgame::session::{ScreenFsmState, Session};

const CATALOG: &str = r#"{"games": [
    {"title": "Smart Pointers", "file": "pointers.json"},
    {"title": "Traits", "file": "traits.json"}
]}"#;

const POINTERS: &str = r#"{"questions": [
    {"id": 1, "word": "Box", "definition": "Owned heap allocation"},
    {"id": 2, "word": "Rc", "definition": "Reference-counted shared ownership"},
    {"id": 3, "word": "RefCell", "definition": "Borrow checking at runtime"}
]}"#;

const TRAITS: &str = r#"{"questions": [
    {"id": "t1", "word": "Clone", "definition": "Explicit duplication"},
    {"id": "t2", "word": "Drop", "definition": "Cleanup when a value goes out of scope"}
]}"#;

fn id(s: &str) -> QuestionId {
    QuestionId::new(s)
}

fn memory_session() -> Session<InMemorySource> {
    let source = InMemorySource::new()
        .with_file("pointers.json", POINTERS)
        .with_file("traits.json", TRAITS);
    Session::new(
        Catalog::from_json(CATALOG).unwrap(),
        source,
        RoundConfig::new().with_seed(42),
    )
    .unwrap()
}

struct TempDir(PathBuf);

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("matchgame-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Play a game loaded from disk through to the completion screen.
#[test]
fn test_full_game_from_directory() {
    let dir = TempDir::new("full-game");
    std::fs::write(dir.0.join("pointers.json"), POINTERS).unwrap();

    let mut session = Session::new(
        Catalog::from_json(CATALOG).unwrap(),
        DirectorySource::new(&dir.0),
        RoundConfig::new().with_seed(1),
    )
    .unwrap();

    session.start_game("pointers.json").unwrap();

    // Miss "1" three times: rejected, rejected, revealed
    for _ in 0..3 {
        session.attempt_match(&id("2"), &id("1"));
    }
    session.attempt_match(&id("2"), &id("2"));
    session.attempt_match(&id("3"), &id("3"));

    let effects = session.tick(1_000);
    assert!(effects.iter().any(PresentationEffect::is_completion));
    assert_eq!(session.screen(), &ScreenFsmState::Completed);

    let summary = session.summary().unwrap();
    assert_eq!(summary.score, 2);
    assert_eq!(summary.percentage_label(), "66.67");
    assert_eq!(summary.verdict().message(), "Try again!");
}

/// A game listed in the catalog whose file is missing reports the source.
#[test]
fn test_missing_question_file() {
    let dir = TempDir::new("missing-file");

    let mut session = Session::new(
        Catalog::from_json(CATALOG).unwrap(),
        DirectorySource::new(&dir.0),
        RoundConfig::new(),
    )
    .unwrap();

    let result = session.start_game("traits.json");
    assert!(matches!(result, Err(Error::Source { file, .. }) if file == "traits.json"));
    assert_eq!(session.screen(), &ScreenFsmState::Home);
}

/// Retrying while a fade-out is pending must not remove tiles of the new round.
#[test]
fn test_retry_cancels_old_effects() {
    let timings = PresentationTimings {
        fade_out_ms: 500,
        incorrect_flash_ms: 1_000,
        completion_delay_ms: 100,
    };
    let config = RoundConfig::new().with_seed(3).with_timings(timings);
    let mut session = Session::new(
        Catalog::from_json(CATALOG).unwrap(),
        InMemorySource::new().with_file("traits.json", TRAITS),
        config,
    )
    .unwrap();

    session.start_game("traits.json").unwrap();
    session.attempt_match(&id("t1"), &id("t1"));
    session.attempt_match(&id("t2"), &id("t2"));

    // Completion is due before the fade-outs finish
    let effects = session.tick(100);
    assert_eq!(effects.len(), 1);
    assert_eq!(session.screen(), &ScreenFsmState::Completed);
    assert_eq!(session.pending_effects(), 2);

    session.retry().unwrap();
    assert_eq!(session.pending_effects(), 0);
    assert!(session.tick(1_000).is_empty());

    let round = session.round().unwrap();
    assert!(round.is_open(&id("t1")));
    assert!(round.is_open(&id("t2")));
}

#[test]
fn test_switch_games_via_home() {
    let mut session = memory_session();

    session.start_game("pointers.json").unwrap();
    session.attempt_match(&id("2"), &id("1"));
    session.back_home().unwrap();

    let round = session.start_game("traits.json").unwrap();
    assert_eq!(round.total(), 2);
    assert_eq!(session.selected_game(), Some("traits.json"));

    // The flash from the abandoned round never fires
    assert!(session.tick(5_000).is_empty());
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_drops_after_leaving_are_ignored() {
    let mut session = memory_session();
    session.start_game("pointers.json").unwrap();
    session.back_home().unwrap();

    let outcome = session.attempt_match(&id("1"), &id("1"));
    assert!(outcome.is_ignored());
}

#[test]
fn test_invalid_config_rejected() {
    let result = Session::new(
        Catalog::default(),
        InMemorySource::new(),
        RoundConfig::new().with_max_attempts(0),
    );
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_config_from_json() {
    let config = RoundConfig::from_json(
        r#"{"maxAttempts": 2, "passThreshold": 50.0, "seed": 9}"#,
    )
    .unwrap();

    let mut session = Session::new(
        Catalog::from_json(CATALOG).unwrap(),
        InMemorySource::new().with_file("traits.json", TRAITS),
        config,
    )
    .unwrap();
    session.start_game("traits.json").unwrap();

    // Two attempts: the second miss reveals
    session.attempt_match(&id("t2"), &id("t1"));
    session.attempt_match(&id("t2"), &id("t1"));
    session.attempt_match(&id("t2"), &id("t2"));
    session.tick(500);

    let summary = session.summary().unwrap();
    assert_eq!(summary.percentage_label(), "50.00");
    assert!(summary.passed);
}
