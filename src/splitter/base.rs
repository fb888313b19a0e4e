//! Base trait for sentence tokenizers.

use anyhow::Result;

/// A strategy that splits text into sentences.
///
/// Sentences are trimmed, non-empty slices of the input, in input order.
pub trait SentenceTokenizer: Send + Sync {
    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;

    /// Split `text` into sentences.
    ///
    /// # Returns
    /// The sentences, or an error if this tokenizer cannot handle the input.
    fn tokenize<'a>(&self, text: &'a str) -> Result<Vec<&'a str>>;

    /// Get the description of this tokenizer.
    fn description(&self) -> &'static str {
        "A sentence tokenizer"
    }
}

/// Stands in for a tokenizer whose resources failed to load.
///
/// Every call fails with the load error, so a [`super::SentenceSplitter`]
/// built around it always takes its fallback path.
pub struct UnavailableTokenizer {
    reason: String,
}

impl UnavailableTokenizer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SentenceTokenizer for UnavailableTokenizer {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn tokenize<'a>(&self, _text: &'a str) -> Result<Vec<&'a str>> {
        anyhow::bail!("sentence tokenizer unavailable: {}", self.reason)
    }

    fn description(&self) -> &'static str {
        "Placeholder for a tokenizer that could not be loaded"
    }
}

/// Check that every sentence is a trimmed, non-empty string.
#[cfg(test)]
pub(crate) fn assert_well_formed(sentences: &[&str]) {
    assert!(!sentences.is_empty(), "no sentences produced");
    for sentence in sentences {
        assert!(!sentence.is_empty());
        assert_eq!(*sentence, sentence.trim());
    }
}

/// Check that `sentences` hold all non-whitespace content of `text`, in order.
#[cfg(test)]
pub(crate) fn assert_covers(text: &str, sentences: &[&str]) {
    let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(strip(&sentences.concat()), strip(text));
}
