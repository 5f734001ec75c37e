//! Error taxonomy.
//!
//! Loader failures are fatal at startup; document-read failures are fatal to
//! a single classification request. The pipeline stages themselves are total
//! over any input string and never fail.

use std::io;

use thiserror::Error;

/// A lookup-table source could not be loaded.
///
/// Any variant is startup-fatal: a service must not begin classifying
/// without all three tables.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon source: {0}")]
    Io(#[from] io::Error),

    /// A non-blank lemma-dictionary row with fewer than six fields.
    #[error("line {line}: malformed lemma row (expected 6 whitespace-delimited fields)")]
    MalformedLemmaRow { line: usize },

    /// A frequency row that is not `word,count` with an integer count.
    #[error("line {line}: malformed frequency row: {reason}")]
    MalformedFrequencyRow { line: usize, reason: String },
}

/// The document to classify could not be read.
///
/// Fatal to the single request; no partial result is produced.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),

    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A result formatter failed to render the classification.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to serialize result as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
