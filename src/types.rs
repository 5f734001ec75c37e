//! Core data model shared across the pipeline stages.

use serde::{Deserialize, Serialize};

/// How the tokenizer groups input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizeMode {
    /// Whitespace splitting over the whole document; no phrase context.
    #[default]
    Simple,
    /// Blank-line-delimited blocks (subtitle captions); every token carries
    /// the block it occurred in as context.
    Phrase,
}

/// A raw whitespace-delimited fragment of the input document.
///
/// Tokens are transient: they exist only between tokenization and
/// normalization, and borrow their text from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The fragment exactly as it appeared in the document.
    pub text: &'a str,
    /// The phrase block this token occurred in (`Phrase` mode only).
    pub phrase: Option<String>,
}

/// One classified word: a unique lemma, its corpus frequency, and (in
/// `Phrase` mode) the shortest phrase it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub value: String,
    pub freq: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
}

/// The three-way partition of a document's unique lemmas.
///
/// Every lemma that survives normalization appears in exactly one bucket.
/// Buckets are sorted lexicographically by lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Lemmas the learner has already marked as learned.
    #[serde(rename = "knownWords")]
    pub known_words: Vec<WordRecord>,
    /// Real corpus words the learner has not marked as learned.
    #[serde(rename = "unknownWords")]
    pub unknown_words: Vec<WordRecord>,
    /// Lemmas absent from the corpus entirely (OCR noise, proper nouns,
    /// foreign fragments).
    #[serde(rename = "brokenWords")]
    pub broken_words: Vec<WordRecord>,
}

impl Classification {
    /// Total number of unique lemmas across all buckets.
    pub fn len(&self) -> usize {
        self.known_words.len() + self.unknown_words.len() + self.broken_words.len()
    }

    /// Returns `true` if no lemma was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_record_serializes_without_phrase() {
        let record = WordRecord {
            value: "run".into(),
            freq: 120,
            phrase: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["value"], "run");
        assert_eq!(json["freq"], 120);
        assert!(json.get("phrase").is_none());
    }

    #[test]
    fn test_word_record_serializes_with_phrase() {
        let record = WordRecord {
            value: "cat".into(),
            freq: 7,
            phrase: Some("the cat sat".into()),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["phrase"], "the cat sat");
    }

    #[test]
    fn test_classification_uses_camel_case_keys() {
        let result = Classification::default();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("knownWords").is_some());
        assert!(json.get("unknownWords").is_some());
        assert!(json.get("brokenWords").is_some());
    }

    #[test]
    fn test_tokenize_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&TokenizeMode::Simple).unwrap(),
            "\"simple\""
        );
        assert_eq!(
            serde_json::to_string(&TokenizeMode::Phrase).unwrap(),
            "\"phrase\""
        );
    }

    #[test]
    fn test_classification_len() {
        let mut result = Classification::default();
        assert!(result.is_empty());
        result.broken_words.push(WordRecord {
            value: "xqzt".into(),
            freq: 0,
            phrase: None,
        });
        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
    }
}
