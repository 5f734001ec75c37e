//! Frequency corpus: lemma to general-English occurrence count.
//!
//! The source is a two-column `word,count` CSV with one header row.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::errors::LexiconError;

/// Immutable lemma to corpus-count mapping.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    /// Load from a `word,count` CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Load from any buffered reader. The first line is a header and is
    /// skipped; blank lines are skipped; anything else must be
    /// `word,count` with an unsigned integer count.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LexiconError> {
        let mut counts = FxHashMap::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if idx == 0 || line.trim().is_empty() {
                continue;
            }
            let mut fields = line.splitn(2, ',');
            let word = fields.next().unwrap_or_default();
            let count = fields.next().ok_or_else(|| {
                LexiconError::MalformedFrequencyRow {
                    line: idx + 1,
                    reason: "expected two comma-delimited columns".into(),
                }
            })?;
            let count: u64 = count.trim().parse().map_err(|e| {
                LexiconError::MalformedFrequencyRow {
                    line: idx + 1,
                    reason: format!("{e}"),
                }
            })?;
            counts.insert(word.to_string(), count);
        }
        Ok(Self { counts })
    }

    /// Build from explicit `(lemma, count)` pairs.
    pub fn from_counts(pairs: &[(&str, u64)]) -> Self {
        let counts = pairs
            .iter()
            .map(|(lemma, count)| (lemma.to_string(), *count))
            .collect();
        Self { counts }
    }

    /// Corpus count for a lemma, 0 when the corpus has no entry.
    pub fn count_of(&self, lemma: &str) -> u64 {
        self.counts.get(lemma).copied().unwrap_or(0)
    }

    /// Number of lemmas in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
