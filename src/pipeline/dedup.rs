//! Per-document deduplication with a phrase-quality tie-break.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

/// Collapse repeated lemmas into one entry each, scoped to one document.
///
/// The first occurrence of a lemma wins. In phrase mode, a later occurrence
/// replaces the stored phrase only when its phrase is strictly shorter (by
/// character count); equal lengths keep the first-seen phrase.
///
/// The result is sorted lexicographically by lemma, so output never depends
/// on hash iteration order.
pub fn dedupe(
    occurrences: impl IntoIterator<Item = (String, Option<String>)>,
) -> Vec<(String, Option<String>)> {
    let mut seen: FxHashMap<String, Option<String>> = FxHashMap::default();
    for (lemma, phrase) in occurrences {
        match seen.entry(lemma) {
            Entry::Vacant(slot) => {
                slot.insert(phrase);
            }
            Entry::Occupied(mut slot) => {
                let stored = slot.get_mut();
                let replace = match (stored.as_deref(), phrase.as_deref()) {
                    (Some(old), Some(new)) => char_len(new) < char_len(old),
                    _ => false,
                };
                if replace {
                    *stored = phrase;
                }
            }
        }
    }

    let mut unique: Vec<_> = seen.into_iter().collect();
    unique.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    unique
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
