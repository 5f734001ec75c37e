//! Three-way frequency classification of deduplicated lemmas.

use crate::lexicon::{FrequencyTable, KnownWords};
use crate::types::{Classification, WordRecord};

/// Partition unique lemmas into known / unknown / broken buckets.
///
/// Decision order per lemma:
/// 1. membership in the known set wins, regardless of corpus count;
/// 2. else a positive corpus count means a real word the learner has not
///    marked as learned;
/// 3. else the lemma is noise ("broken"): an OCR artifact, proper noun, or
///    foreign fragment.
///
/// Every record carries its resolved corpus count, 0 when absent. The
/// function is total and preserves the input order within each bucket.
pub fn classify(
    records: impl IntoIterator<Item = (String, Option<String>)>,
    known: &KnownWords,
    frequencies: &FrequencyTable,
) -> Classification {
    let mut result = Classification::default();
    for (lemma, phrase) in records {
        let freq = frequencies.count_of(&lemma);
        let record = WordRecord {
            value: lemma,
            freq,
            phrase,
        };
        if known.contains(&record.value) {
            result.known_words.push(record);
        } else if freq > 0 {
            result.unknown_words.push(record);
        } else {
            result.broken_words.push(record);
        }
    }
    result
}
