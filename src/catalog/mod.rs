//! Game catalog and question file decoding.
//!
//! The catalog is a JSON manifest listing the playable games:
//!
//! ```json
//! { "games": [ { "title": "Rust Basics", "file": "rust_basics.json" } ] }
//! ```
//!
//! Each `file` names a question file:
//!
//! ```json
//! { "questions": [ { "id": "q1", "word": "Crate", "definition": "A compilation unit" } ] }
//! ```
//!
//! Fetching the bytes is the job of a [`QuestionSource`]; this module only
//! decodes and validates them.

mod source;

pub use source::{DirectorySource, InMemorySource, QuestionSource};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Question, QuestionSet, Result};

/// One playable game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Name shown in the game picker.
    pub title: String,
    /// Question file reference, resolved by a `QuestionSource`.
    pub file: String,
}

impl CatalogEntry {
    /// Create a new entry.
    pub fn new(title: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            file: file.into(),
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    games: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

/// The list of games a player can pick from.
///
/// An empty catalog is valid; it just offers nothing to start.
///
/// ## Example
///
/// ```
/// use rust_matchgame::catalog::Catalog;
///
/// let catalog = Catalog::from_json(
///     r#"{"games": [{"title": "Ownership", "file": "ownership.json"}]}"#,
/// )
/// .unwrap();
///
/// assert_eq!(catalog.get("ownership.json").unwrap().title, "Ownership");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    games: Vec<CatalogEntry>,
    by_file: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from entries, in display order.
    ///
    /// If two entries name the same file, the first one wins lookups.
    pub fn new(games: Vec<CatalogEntry>) -> Self {
        let mut by_file = FxHashMap::default();
        for (pos, entry) in games.iter().enumerate() {
            by_file.entry(entry.file.clone()).or_insert(pos);
        }
        Self { games, by_file }
    }

    /// Decode a catalog manifest.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::new(file.games))
    }

    /// Find the entry for a question file.
    #[must_use]
    pub fn get(&self, file: &str) -> Option<&CatalogEntry> {
        self.by_file.get(file).map(|&pos| &self.games[pos])
    }

    /// Iterate over entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.games.iter()
    }

    /// Number of games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if there is nothing to play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Decode and validate a question file.
///
/// Fails with `Decode` for malformed JSON and `InvalidInput` for an empty
/// or duplicate-id question list.
pub fn parse_question_file(json: &str) -> Result<QuestionSet> {
    let file: QuestionFile = serde_json::from_str(json)?;
    Ok(QuestionSet::new(file.questions)?)
}
