//! Validated question sets.
//!
//! A `QuestionSet` is the ordered, non-empty sequence of questions a round
//! is played with. Ids are unique; both invariants are checked once, at
//! construction, so the round controller never sees a malformed set.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::error::InvalidInput;
use super::question::{Question, QuestionId};

/// Ordered, validated sequence of questions.
///
/// Backed by `im` structures so cloning a set into each new round is O(1).
///
/// ## Example
///
/// ```
/// use rust_matchgame::core::{Question, QuestionId, QuestionSet};
///
/// let set = QuestionSet::new(vec![
///     Question::new("q1", "Crate", "A compilation unit"),
///     Question::new("q2", "Trait", "Shared behavior"),
/// ])
/// .unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.get(&QuestionId::new("q2")).unwrap().word, "Trait");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionSet {
    questions: Vector<Question>,
    index: ImHashMap<QuestionId, usize>,
}

impl QuestionSet {
    /// Validate and build a question set.
    ///
    /// Fails on an empty sequence or on the first repeated id.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Result<Self, InvalidInput> {
        let mut ordered = Vector::new();
        let mut index = ImHashMap::new();

        for question in questions {
            if index.contains_key(&question.id) {
                return Err(InvalidInput::DuplicateId(question.id));
            }
            index.insert(question.id.clone(), ordered.len());
            ordered.push_back(question);
        }

        if ordered.is_empty() {
            return Err(InvalidInput::EmptyQuestionSet);
        }

        Ok(Self {
            questions: ordered,
            index,
        })
    }

    /// Get a question by ID.
    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).and_then(|&pos| self.questions.get(pos))
    }

    /// Check if an ID belongs to this set.
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a question in load order.
    #[must_use]
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of questions. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over questions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Iterate over IDs in load order.
    pub fn ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions.iter().map(|q| &q.id)
    }
}

impl TryFrom<Vec<Question>> for QuestionSet {
    type Error = InvalidInput;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionSet> for Vec<Question> {
    fn from(set: QuestionSet) -> Self {
        set.questions.into_iter().collect()
    }
}
