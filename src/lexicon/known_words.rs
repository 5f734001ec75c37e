//! The learner's known-vocabulary set.
//!
//! A plain set of lemmas with membership semantics; membership here takes
//! priority over any frequency-based classification.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::errors::LexiconError;

/// Immutable set of lemmas the learner has already learned.
#[derive(Debug, Clone, Default)]
pub struct KnownWords {
    words: FxHashSet<String>,
}

impl KnownWords {
    /// Load from a newline-delimited file, one lemma per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Load from any buffered reader. Surrounding whitespace is trimmed and
    /// blank lines are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LexiconError> {
        let mut words = FxHashSet::default();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(Self { words })
    }

    /// Build from an explicit word list.
    pub fn from_words(words: &[&str]) -> Self {
        let words = words.iter().map(|w| w.to_string()).collect();
        Self { words }
    }

    /// Returns `true` if the learner has marked this lemma as learned.
    pub fn contains(&self, lemma: &str) -> bool {
        self.words.contains(lemma)
    }

    /// Number of known lemmas.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no lemma is marked as known.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
