//! Lemma dictionary: surface form to base form.
//!
//! The source is a whitespace-delimited table with (0-based) columns
//! `lemRank lemma PoS lemFreq wordFreq word`: the lemma sits at index 1 and
//! the surface form at index 5.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::errors::LexiconError;

/// Immutable surface-form to lemma mapping.
#[derive(Debug, Clone, Default)]
pub struct LemmaMap {
    entries: FxHashMap<String, String>,
}

impl LemmaMap {
    /// Load from a whitespace-delimited dictionary file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Load from any buffered reader.
    ///
    /// Blank lines are skipped; a non-blank row with fewer than six fields
    /// is malformed.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LexiconError> {
        let mut entries = FxHashMap::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 6 {
                return Err(LexiconError::MalformedLemmaRow { line: idx + 1 });
            }
            entries.insert(fields[5].to_string(), fields[1].to_string());
        }
        Ok(Self { entries })
    }

    /// Build from explicit `(surface, lemma)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(surface, lemma)| (surface.to_string(), lemma.to_string()))
            .collect();
        Self { entries }
    }

    /// The lemma recorded for a surface form, if any.
    pub fn lemma_of(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    /// Number of surface forms in the dictionary.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
