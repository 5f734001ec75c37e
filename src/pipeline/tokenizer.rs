//! Tokenization: whitespace splitting, optionally grouped by phrase block.
//!
//! Phrase mode models subtitle files: consecutive alphabetic lines form one
//! caption block, blocks are separated by blank lines, and every token in a
//! block carries the whole block as its phrase context.

use crate::types::{Token, TokenizeMode};

/// Split a document into raw tokens according to `mode`.
///
/// An empty document yields an empty token sequence in either mode.
pub fn tokenize(document: &str, mode: TokenizeMode) -> Vec<Token<'_>> {
    match mode {
        TokenizeMode::Simple => tokenize_simple(document),
        TokenizeMode::Phrase => tokenize_phrases(document),
    }
}

/// Keep a fragment only if its first character is alphabetic.
///
/// Numerals, pure punctuation, and the empty string are all rejected; the
/// empty string is rejected without inspecting a first character.
fn is_word_like(fragment: &str) -> bool {
    fragment.chars().next().map_or(false, char::is_alphabetic)
}

fn tokenize_simple(document: &str) -> Vec<Token<'_>> {
    document
        .split_whitespace()
        .filter(|fragment| is_word_like(fragment))
        .map(|text| Token { text, phrase: None })
        .collect()
}

/// Line-oriented phrase accumulation.
///
/// The buffer moves between two states: empty, and accumulating a block.
/// A non-blank line starting with an alphabetic character extends the
/// block; a blank line flushes it; any other line (subtitle indices,
/// timestamps) is ignored. End of input always flushes a pending block.
fn tokenize_phrases(document: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in document.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush_block(&mut block, &mut tokens);
        } else if is_word_like(line) {
            block.push(line);
        }
    }
    // Terminal flush: a trailing block with no blank line after it still
    // counts as a phrase.
    flush_block(&mut block, &mut tokens);

    tokens
}

/// Emit every word-like token of the buffered block, each paired with the
/// full block text, then reset the buffer.
fn flush_block<'a>(block: &mut Vec<&'a str>, tokens: &mut Vec<Token<'a>>) {
    if block.is_empty() {
        return;
    }
    let phrase = block.join(" ");
    for line in block.drain(..) {
        for text in line.split_whitespace() {
            if is_word_like(text) {
                tokens.push(Token {
                    text,
                    phrase: Some(phrase.clone()),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &'a [Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_simple_splits_on_whitespace() {
        let tokens = tokenize("I am  running.\nRunning is fun!", TokenizeMode::Simple);
        assert_eq!(
            texts(&tokens),
            vec!["I", "am", "running.", "Running", "is", "fun!"]
        );
        assert!(tokens.iter().all(|t| t.phrase.is_none()));
    }

    #[test]
    fn test_simple_drops_numerals_and_punctuation() {
        let tokens = tokenize("42 7th --- hello (aside) world", TokenizeMode::Simple);
        // "7th" starts with a digit, "(aside)" with a parenthesis.
        assert_eq!(texts(&tokens), vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_document_yields_no_tokens() {
        assert!(tokenize("", TokenizeMode::Simple).is_empty());
        assert!(tokenize("", TokenizeMode::Phrase).is_empty());
    }

    #[test]
    fn test_phrase_blocks_attach_context() {
        let doc = "the cat sat\non the mat\n\ncat\n";
        let tokens = tokenize(doc, TokenizeMode::Phrase);

        let first_block: Vec<_> = tokens
            .iter()
            .filter(|t| t.phrase.as_deref() == Some("the cat sat on the mat"))
            .collect();
        assert_eq!(first_block.len(), 6);

        let second_block: Vec<_> = tokens
            .iter()
            .filter(|t| t.phrase.as_deref() == Some("cat"))
            .collect();
        assert_eq!(second_block.len(), 1);
    }

    #[test]
    fn test_phrase_mode_skips_subtitle_indices_and_timestamps() {
        let doc = "1\n00:00:01,000 --> 00:00:03,000\nHello there\n\n2\n00:00:04,000 --> 00:00:06,000\nGeneral greeting\n";
        let tokens = tokenize(doc, TokenizeMode::Phrase);
        assert_eq!(
            texts(&tokens),
            vec!["Hello", "there", "General", "greeting"]
        );
        assert_eq!(tokens[0].phrase.as_deref(), Some("Hello there"));
        assert_eq!(tokens[2].phrase.as_deref(), Some("General greeting"));
    }

    #[test]
    fn test_trailing_block_is_flushed_without_blank_line() {
        let tokens = tokenize("no trailing newline", TokenizeMode::Phrase);
        assert_eq!(texts(&tokens), vec!["no", "trailing", "newline"]);
        assert_eq!(tokens[0].phrase.as_deref(), Some("no trailing newline"));
    }

    #[test]
    fn test_blank_lines_only_yield_no_tokens() {
        assert!(tokenize("\n\n\n", TokenizeMode::Phrase).is_empty());
    }

    #[test]
    fn test_consecutive_blank_lines_do_not_produce_empty_phrases() {
        let doc = "hello\n\n\n\nworld\n";
        let tokens = tokenize(doc, TokenizeMode::Phrase);
        assert_eq!(texts(&tokens), vec!["hello", "world"]);
        assert_eq!(tokens[0].phrase.as_deref(), Some("hello"));
        assert_eq!(tokens[1].phrase.as_deref(), Some("world"));
    }
}
