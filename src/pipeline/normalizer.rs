//! Token normalization: case folding, markup stripping, punctuation
//! trimming, contraction truncation, and lemma dictionary lookup.

use crate::lexicon::LemmaMap;

/// Characters trimmed from both ends of a lowercased token.
const TRIM_CHARS: &[char] = &['.', ',', '!', '?', '-'];

/// Markup artifact left behind by subtitle italics.
const ITALIC_CLOSE: &str = "</i>";

/// Maps raw tokens to canonical lemmas via the immutable dictionary.
///
/// Pure: the only state is a read-only borrow of the [`LemmaMap`].
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    lemmas: &'a LemmaMap,
}

impl<'a> Normalizer<'a> {
    pub fn new(lemmas: &'a LemmaMap) -> Self {
        Self { lemmas }
    }

    /// Normalize one raw token to its lemma.
    ///
    /// Steps, in order: lowercase; remove every literal `</i>`; trim
    /// leading and trailing `.,!?-`; truncate at the first apostrophe
    /// (dropping contraction suffixes, e.g. `don't` becomes `don`); look
    /// the result up in the dictionary, falling back to the normalized
    /// token itself.
    ///
    /// Returns `None` when nothing survives trimming; such tokens are
    /// skipped rather than classified.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let lowered = raw.to_lowercase();
        let stripped = lowered.replace(ITALIC_CLOSE, "");
        let trimmed = stripped.trim_matches(TRIM_CHARS);
        let base = match trimmed.find('\'') {
            Some(pos) => &trimmed[..pos],
            None => trimmed,
        };
        if base.is_empty() {
            return None;
        }
        Some(match self.lemmas.lemma_of(base) {
            Some(lemma) => lemma.to_string(),
            None => base.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer_with(pairs: &[(&str, &str)]) -> LemmaMap {
        LemmaMap::from_pairs(pairs)
    }

    #[test]
    fn test_lowercases_and_trims_punctuation() {
        let lemmas = normalizer_with(&[]);
        let n = Normalizer::new(&lemmas);
        assert_eq!(n.normalize("Hello,"), Some("hello".into()));
        assert_eq!(n.normalize("world!?"), Some("world".into()));
        assert_eq!(n.normalize("--dash--"), Some("dash".into()));
    }

    #[test]
    fn test_contraction_variants_share_a_lemma() {
        let lemmas = normalizer_with(&[]);
        let n = Normalizer::new(&lemmas);
        let expected = Some("don".to_string());
        assert_eq!(n.normalize("Don't"), expected);
        assert_eq!(n.normalize("DON'T"), expected);
        assert_eq!(n.normalize("don't."), expected);
    }

    #[test]
    fn test_strips_italic_markup() {
        let lemmas = normalizer_with(&[]);
        let n = Normalizer::new(&lemmas);
        assert_eq!(n.normalize("word</i>"), Some("word".into()));
        assert_eq!(n.normalize("word</i>."), Some("word".into()));
    }

    #[test]
    fn test_dictionary_lookup_with_identity_fallback() {
        let lemmas = normalizer_with(&[("running", "run")]);
        let n = Normalizer::new(&lemmas);
        assert_eq!(n.normalize("Running"), Some("run".into()));
        assert_eq!(n.normalize("jumping"), Some("jumping".into()));
    }

    #[test]
    fn test_nothing_left_after_trimming_is_skipped() {
        let lemmas = normalizer_with(&[]);
        let n = Normalizer::new(&lemmas);
        assert_eq!(n.normalize("---"), None);
        assert_eq!(n.normalize("?!"), None);
        assert_eq!(n.normalize("</i>"), None);
        assert_eq!(n.normalize("'tis"), None); // truncates to the empty prefix
    }

    #[test]
    fn test_lookup_happens_after_truncation() {
        // The dictionary is keyed on the truncated form.
        let lemmas = normalizer_with(&[("don", "do")]);
        let n = Normalizer::new(&lemmas);
        assert_eq!(n.normalize("don't"), Some("do".into()));
    }
}
