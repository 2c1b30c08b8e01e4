//! Question file sources.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{Error, Result};

/// Supplies the raw contents of question files.
///
/// Implementations decide where files live; the session only asks for a
/// file by the reference the catalog gives it.
pub trait QuestionSource {
    /// Load the contents of `file`.
    fn load(&self, file: &str) -> Result<String>;
}

/// Reads question files from a local directory.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl QuestionSource for DirectorySource {
    fn load(&self, file: &str) -> Result<String> {
        let path = self.root.join(file);
        debug!(path = %path.display(), "loading question file");
        std::fs::read_to_string(&path).map_err(|e| Error::Source {
            file: file.to_string(),
            message: e.to_string(),
        })
    }
}

/// Question files held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    files: FxHashMap<String, String>,
}

impl InMemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(file, contents);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, file: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(file.into(), contents.into());
    }
}

impl QuestionSource for InMemorySource {
    fn load(&self, file: &str) -> Result<String> {
        self.files.get(file).cloned().ok_or_else(|| Error::Source {
            file: file.to_string(),
            message: "not found".to_string(),
        })
    }
}
