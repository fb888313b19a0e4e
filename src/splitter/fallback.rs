//! Character-scan sentence splitter used when the primary tokenizer fails.

use anyhow::Result;

use super::base::SentenceTokenizer;
use crate::SENTENCE_TERMINATORS;

/// Deterministic splitter that cuts after every `.`, `!` or `?`.
///
/// Runs of terminators are not collapsed: `"Wait..."` yields `"Wait."`,
/// `"."` and `"."`. Never fails.
pub struct FallbackSplitter {
    /// Sentence-ending delimiters
    delimiters: Vec<char>,
}

impl FallbackSplitter {
    /// Create a fallback splitter with the default delimiters.
    pub fn new() -> Self {
        Self {
            delimiters: SENTENCE_TERMINATORS.to_vec(),
        }
    }

    /// Split text into sentences.
    ///
    /// Text with no meaningful content comes back untouched as the only
    /// sentence.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut current_start = 0;

        for (i, c) in text.char_indices() {
            if !self.delimiters.contains(&c) {
                continue;
            }

            let end = i + c.len_utf8();
            let current = text[current_start..end].trim();
            if !current.is_empty() {
                sentences.push(current);
                current_start = end;
            }
        }

        // Add remaining text as final sentence
        let rest = text[current_start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        if sentences.is_empty() {
            return vec![text];
        }

        sentences
    }
}

impl Default for FallbackSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer for FallbackSplitter {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn description(&self) -> &'static str {
        "Splits after every terminal punctuation mark"
    }

    fn tokenize<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        Ok(self.split(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::base::{assert_covers, assert_well_formed};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_split() {
        let splitter = FallbackSplitter::new();
        let text = "This is the first sentence. This is the second sentence! Is this the third?";
        assert_eq!(
            splitter.split(text),
            vec![
                "This is the first sentence.",
                "This is the second sentence!",
                "Is this the third?",
            ]
        );
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let splitter = FallbackSplitter::new();
        assert_eq!(
            splitter.split("Done. And then nothing"),
            vec!["Done.", "And then nothing"]
        );
        assert_eq!(splitter.split("no punctuation at all"), vec!["no punctuation at all"]);
    }

    #[test]
    fn test_splits_inside_abbreviations_and_decimals() {
        let splitter = FallbackSplitter::new();
        assert_eq!(
            splitter.split("Dr. Smith paid 3.50 today."),
            vec!["Dr.", "Smith paid 3.", "50 today."]
        );
    }

    #[test]
    fn test_terminator_runs_are_not_collapsed() {
        let splitter = FallbackSplitter::new();
        assert_eq!(splitter.split("Wait... what?!"), vec!["Wait.", ".", ".", "what?", "!"]);
    }

    #[test]
    fn test_whitespace_only_returns_input() {
        let splitter = FallbackSplitter::new();
        assert_eq!(splitter.split("   \n\t"), vec!["   \n\t"]);
        assert_eq!(splitter.split(""), vec![""]);
    }

    #[test]
    fn test_multibyte_content() {
        let splitter = FallbackSplitter::new();
        let text = "Ça va très bien! Naïve café? Ünïcödé.";
        let sentences = splitter.split(text);
        assert_eq!(sentences, vec!["Ça va très bien!", "Naïve café?", "Ünïcödé."]);
        assert_covers(text, &sentences);
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        let splitter = FallbackSplitter::new();
        let text = "One. Two!  Three?\n\nFour";
        let first = splitter.split(text);
        let second = splitter.split(text);
        assert_eq!(first, second);

        let resplit: Vec<&str> = first.iter().flat_map(|s| splitter.split(s)).collect();
        assert_eq!(resplit, first);
    }

    #[test]
    fn test_covers_content() {
        let splitter = FallbackSplitter::new();
        for text in [
            "I love this!",
            "This is great. This is terrible.",
            "  leading space. trailing space   ",
            "a.b.c",
            "What?! No way... Really.",
        ] {
            let sentences = splitter.split(text);
            assert_well_formed(&sentences);
            assert_covers(text, &sentences);
        }
    }
}
