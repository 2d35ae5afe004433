//! Sentence/word tokenization behind a trait seam.
//!
//! The tokenizer is constructed once at startup and carried in `AppState` as
//! `Arc<dyn Tokenizer>`, so scoring and extraction receive it explicitly and
//! tests can swap in fakes.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n+").unwrap());

pub trait Tokenizer: Send + Sync {
    /// Splits text into sentences. Line breaks count as boundaries, which
    /// suits resumes (headings and bullets are standalone statements).
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Splits text into word tokens.
    fn words(&self, text: &str) -> Vec<String>;

    /// Word tokens that are purely alphabetic (readability formula input).
    fn alpha_words(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer built on UAX-29 word segmentation.
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        SENTENCE_BOUNDARY
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    fn words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(ToOwned::to_owned).collect()
    }

    fn alpha_words(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|w| w.chars().all(char::is_alphabetic))
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_split_on_terminators() {
        let tok = UnicodeTokenizer;
        let sents = tok.sentences("First sentence. Second one! Third?");
        assert_eq!(sents, vec!["First sentence", "Second one", "Third"]);
    }

    #[test]
    fn test_sentences_split_on_newlines() {
        let tok = UnicodeTokenizer;
        let sents = tok.sentences("JOHN DOE\njohn@example.com\nExperience");
        assert_eq!(sents.len(), 3);
    }

    #[test]
    fn test_sentences_empty_input() {
        let tok = UnicodeTokenizer;
        assert!(tok.sentences("").is_empty());
        assert!(tok.sentences("   \n  ").is_empty());
    }

    #[test]
    fn test_words_include_numbers() {
        let tok = UnicodeTokenizer;
        let words = tok.words("Improved performance by 40% in 2023");
        assert!(words.contains(&"40".to_string()));
        assert!(words.contains(&"Improved".to_string()));
    }

    #[test]
    fn test_alpha_words_drop_numeric_tokens() {
        let tok = UnicodeTokenizer;
        let words = tok.alpha_words("Shipped 3 releases");
        assert_eq!(words, vec!["Shipped", "releases"]);
    }
}
