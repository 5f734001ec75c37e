//! Immutable lookup tables: lemma dictionary, frequency corpus, known words.
//!
//! All three tables are loaded once at startup and never mutated afterwards.
//! They are shared by read-only reference into the pipeline, so concurrent
//! classification requests need no locking.

mod frequency;
mod known_words;
mod lemma_map;

pub use frequency::FrequencyTable;
pub use known_words::KnownWords;
pub use lemma_map::LemmaMap;

use std::path::Path;

use crate::errors::LexiconError;

/// The three lookup tables the pipeline reads.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Surface form to base form.
    pub lemmas: LemmaMap,
    /// Base form to general-corpus occurrence count.
    pub frequencies: FrequencyTable,
    /// Base forms the learner has already marked as learned.
    pub known: KnownWords,
}

impl Lexicon {
    /// Load all three tables from disk.
    ///
    /// Any failure is startup-fatal: the caller must not serve
    /// classification requests without a complete lexicon.
    pub fn load(
        lemmas: impl AsRef<Path>,
        frequencies: impl AsRef<Path>,
        known_words: impl AsRef<Path>,
    ) -> Result<Self, LexiconError> {
        Ok(Self {
            lemmas: LemmaMap::from_path(lemmas)?,
            frequencies: FrequencyTable::from_path(frequencies)?,
            known: KnownWords::from_path(known_words)?,
        })
    }
}
