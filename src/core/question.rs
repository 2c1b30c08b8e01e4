//! Question records: the term/definition pairs a round is built from.
//!
//! A `Question` is immutable once loaded. Its `id` identifies both the
//! term tile and the definition tile on screen, so a match is correct
//! exactly when the dragged term and the target definition share an id.

use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for a question within a question set.
///
/// Question files may spell ids as strings (`"q1"`) or as bare numbers
/// (`1`); both decode to the same textual id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single term/definition pair.
///
/// ## Example
///
/// ```
/// use rust_matchgame::core::Question;
///
/// let q = Question::new("q1", "Ownership", "Each value has a single owner");
/// assert_eq!(q.id.as_str(), "q1");
/// assert_eq!(q.word, "Ownership");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Key shared by the term tile and the definition tile.
    pub id: QuestionId,

    /// The term a player drags.
    pub word: String,

    /// The description the term must be dropped on.
    pub definition: String,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<QuestionId>,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            definition: definition.into(),
        }
    }
}
