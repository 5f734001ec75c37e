//! # Lexiscan
//!
//! Classifies the vocabulary of a text against a learner's known-word list
//! and a general English frequency corpus.
//!
//! A document is tokenized (plain prose, or subtitle-style blank-line
//! phrase blocks), each token is normalized to its base form through a
//! lemma dictionary, repeats are collapsed per document, and every unique
//! lemma lands in exactly one of three buckets:
//!
//! - **known** — the learner has already marked the lemma as learned
//! - **unknown** — a real corpus word the learner has not learned yet
//! - **broken** — absent from the corpus entirely (OCR noise, proper
//!   nouns, foreign fragments)
//!
//! The three lookup tables are loaded once at startup and shared read-only;
//! classification itself is a single bounded, synchronous computation per
//! document.
//!
//! ## Quick start
//!
//! ```
//! use lexiscan::lexicon::{FrequencyTable, KnownWords, LemmaMap, Lexicon};
//! use lexiscan::pipeline::Pipeline;
//! use lexiscan::types::TokenizeMode;
//!
//! let lexicon = Lexicon {
//!     lemmas: LemmaMap::from_pairs(&[("running", "run")]),
//!     frequencies: FrequencyTable::from_counts(&[("run", 120), ("fun", 80)]),
//!     known: KnownWords::from_words(&["i", "am"]),
//! };
//!
//! let pipeline = Pipeline::new(&lexicon, TokenizeMode::Simple);
//! let result = pipeline.classify("I am running. Running is fun!");
//!
//! let values: Vec<&str> = result.unknown_words.iter().map(|r| r.value.as_str()).collect();
//! assert_eq!(values, vec!["fun", "run"]);
//! assert_eq!(result.known_words.len(), 2);  // "am", "i"
//! assert_eq!(result.broken_words.len(), 1); // "is" is in neither table
//! ```

pub mod errors;
pub mod input;
pub mod lexicon;
pub mod pipeline;
pub mod types;

pub use lexicon::Lexicon;
pub use pipeline::Pipeline;
pub use types::{Classification, TokenizeMode, WordRecord};
