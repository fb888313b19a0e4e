//! Linguistically aware sentence tokenizer.
//!
//! Boundaries come from the Unicode sentence segmentation rules (UAX #29),
//! which already keep decimals like `3.14` together and do not break before
//! a lowercase continuation. UAX #29 still breaks after `Dr.` or `J.` when an
//! uppercase word follows, so a second pass rejoins segments that end in a
//! known abbreviation, a single-letter initial or a dotted acronym.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use unicode_segmentation::UnicodeSegmentation;

use super::base::SentenceTokenizer;
use crate::DEFAULT_TOKENIZER_MAX_INPUT_BYTES;

/// Abbreviations that never end a sentence, lowercase and without the final dot.
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    // Titles
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "rev", "hon",
    "gen", "col", "capt", "lt", "sgt", "gov", "sen", "rep", "pres",
    // Organisations
    "inc", "ltd", "co", "corp", "dept", "univ", "assn", "bros",
    // Places
    "ave", "blvd", "rd", "mt", "ft",
    // Latin and common short forms
    "e.g", "i.e", "cf", "vs", "viz", "al", "approx",
    "a.m", "p.m", "u.s", "u.k", "u.n",
];

/// Abbreviations that are also ordinary words, only kept when a number
/// follows (`No. 5`, `Jan. 12`, `p. 40`).
const NUMERIC_ABBREVIATIONS: &[&str] = &[
    "no", "nos", "p", "pp", "fig", "vol", "est", "ch", "sec",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Capitalized words that usually open a new sentence rather than continue
/// a name after an initial.
const SENTENCE_STARTERS: &[&str] = &[
    "a", "an", "the", "i", "it", "its", "he", "she", "we", "they", "you", "this", "that",
    "these", "those", "there", "then", "but", "and", "or", "so", "if", "when", "what",
    "who", "why", "how", "my", "our", "his", "her", "their", "your", "in", "on", "at",
    "after", "before", "now", "yes", "no", "all", "some", "not",
];

/// UAX #29 sentence tokenizer with abbreviation repair.
pub struct UnicodeSentenceTokenizer {
    abbreviations: HashSet<String>,
    max_input_bytes: usize,
}

impl UnicodeSentenceTokenizer {
    /// Create a tokenizer with the built-in abbreviation list.
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
            max_input_bytes: DEFAULT_TOKENIZER_MAX_INPUT_BYTES,
        }
    }

    /// Set the largest input this tokenizer accepts.
    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Add abbreviations (case-insensitive, trailing dot optional).
    pub fn with_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abbreviations
            .extend(abbreviations.into_iter().filter_map(|a| normalize_abbreviation(a.as_ref())));
        self
    }

    /// Add abbreviations read from a file, one per line. Lines starting with
    /// `#` are comments.
    pub fn with_abbreviations_file(self, path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read abbreviations from {}", path.display()))?;
        let entries: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Ok(self.with_abbreviations(entries))
    }

    /// Number of known abbreviations.
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Whether the boundary between `segment` and `next` is a false one,
    /// i.e. `segment` ends in a dot that belongs to an abbreviation.
    fn joins(&self, segment: &str, next: &str) -> bool {
        let Some(body) = segment.trim_end().strip_suffix('.') else {
            return false;
        };

        let mut tokens = body
            .rsplit(char::is_whitespace)
            .map(|t| t.trim_start_matches(|c: char| !c.is_alphanumeric()));
        let token = tokens.next().unwrap_or("");
        if token.is_empty() {
            return false;
        }

        let lower = token.to_lowercase();
        if self.abbreviations.contains(&lower) {
            return true;
        }

        if NUMERIC_ABBREVIATIONS.contains(&lower.as_str()) {
            return next.trim_start().starts_with(|c: char| c.is_ascii_digit());
        }

        // Initial such as the "J" in "J. Smith"; the pronoun "I" ends sentences
        if is_initial(token) {
            let after_initial = tokens
                .next()
                .and_then(|t| t.strip_suffix('.'))
                .is_some_and(is_initial);
            return after_initial || starts_with_name(next);
        }

        // Dotted acronym such as "U.S.A"
        token.contains('.')
            && token.split('.').all(|part| {
                !part.is_empty()
                    && part.chars().count() <= 2
                    && part.chars().all(char::is_alphabetic)
            })
    }
}

fn is_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}

/// Whether `text` opens with a capitalized word that reads like the rest of
/// a name rather than the start of a sentence.
fn starts_with_name(text: &str) -> bool {
    let word = text
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric());

    word.starts_with(char::is_uppercase)
        && !SENTENCE_STARTERS.contains(&word.to_lowercase().as_str())
}

impl Default for UnicodeSentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer for UnicodeSentenceTokenizer {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn description(&self) -> &'static str {
        "UAX #29 sentence boundaries with abbreviation handling"
    }

    fn tokenize<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        if text.len() > self.max_input_bytes {
            anyhow::bail!(
                "input of {} bytes exceeds tokenizer limit of {} bytes",
                text.len(),
                self.max_input_bytes
            );
        }

        let mut sentences = Vec::new();
        let mut push = |start: usize, end: usize| {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
        };

        let mut pending: Option<(usize, usize)> = None;
        for (start, segment) in text.split_sentence_bound_indices() {
            let end = start + segment.len();
            pending = match pending {
                Some((pending_start, pending_end))
                    if self.joins(&text[pending_start..pending_end], segment) =>
                {
                    Some((pending_start, end))
                }
                Some((pending_start, pending_end)) => {
                    push(pending_start, pending_end);
                    Some((start, end))
                }
                None => Some((start, end)),
            };
        }
        if let Some((start, end)) = pending {
            push(start, end);
        }

        if sentences.is_empty() {
            anyhow::bail!("no sentence boundaries found");
        }

        Ok(sentences)
    }
}

fn normalize_abbreviation(raw: &str) -> Option<String> {
    let normalized = raw.trim().trim_end_matches('.').to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::base::{assert_covers, assert_well_formed};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_basic_sentences() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        let sentences = tokenizer.tokenize("This is great. This is terrible.").unwrap();
        assert_eq!(sentences, vec!["This is great.", "This is terrible."]);
    }

    #[test]
    fn test_single_sentence() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        assert_eq!(tokenizer.tokenize("I love this!").unwrap(), vec!["I love this!"]);
        assert_eq!(
            tokenizer.tokenize("no terminal punctuation").unwrap(),
            vec!["no terminal punctuation"]
        );
    }

    #[test]
    fn test_keeps_decimals_together() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        let sentences = tokenizer
            .tokenize("The price rose 3.5 percent. Analysts were pleased.")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["The price rose 3.5 percent.", "Analysts were pleased."]
        );
    }

    #[test]
    fn test_keeps_titles_together() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        let sentences = tokenizer
            .tokenize("Dr. Smith arrived late. Mr. Jones was furious.")
            .unwrap();
        assert_eq!(sentences, vec!["Dr. Smith arrived late.", "Mr. Jones was furious."]);
    }

    #[test]
    fn test_keeps_initials_together() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        let sentences = tokenizer
            .tokenize("J. R. R. Tolkien wrote it. So did I. Then we left.")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["J. R. R. Tolkien wrote it.", "So did I.", "Then we left."]
        );
    }

    #[test]
    fn test_initial_before_a_surname() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        let sentences = tokenizer
            .tokenize("We met J. Smith yesterday. It went well.")
            .unwrap();
        assert_eq!(sentences, vec!["We met J. Smith yesterday.", "It went well."]);
    }

    #[test]
    fn test_single_letter_word_ends_sentence() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("We need plan B. It failed badly.").unwrap(),
            vec!["We need plan B.", "It failed badly."]
        );
        assert_eq!(
            tokenizer.tokenize("Take vitamin C. It is great.").unwrap(),
            vec!["Take vitamin C.", "It is great."]
        );
    }

    #[test]
    fn test_word_abbreviations_need_a_number() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("I said no. Then I left.").unwrap(),
            vec!["I said no.", "Then I left."]
        );
        assert!(tokenizer.joins("Track No.", "5 Main"));
        assert!(tokenizer.joins("Due Jan.", "12 Friday"));
        assert!(!tokenizer.joins("See you in Jan.", "Bring snacks."));
    }

    #[test]
    fn test_question_and_exclamation() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        let sentences = tokenizer.tokenize("Is it good? Yes! It is.").unwrap();
        assert_eq!(sentences, vec!["Is it good?", "Yes!", "It is."]);
    }

    #[test]
    fn test_input_limit_fails() {
        let tokenizer = UnicodeSentenceTokenizer::new().with_max_input_bytes(10);
        let err = tokenizer.tokenize("This sentence is too long.").unwrap_err();
        assert!(err.to_string().contains("exceeds tokenizer limit"));
    }

    #[test]
    fn test_whitespace_only_fails() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        assert!(tokenizer.tokenize("   ").is_err());
        assert!(tokenizer.tokenize("").is_err());
    }

    #[test]
    fn test_custom_abbreviations() {
        let text = "See Approx. Values here. Next one.";
        let plain = UnicodeSentenceTokenizer::new();
        assert_eq!(plain.tokenize(text).unwrap().len(), 2);

        let text = "Ask Wkly. Reports first. Next one.";
        assert_eq!(plain.tokenize(text).unwrap().len(), 3);

        let custom = UnicodeSentenceTokenizer::new().with_abbreviations(["WKLY."]);
        assert_eq!(
            custom.tokenize(text).unwrap(),
            vec!["Ask Wkly. Reports first.", "Next one."]
        );
    }

    #[test]
    fn test_abbreviations_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# extra abbreviations").unwrap();
        writeln!(file, "wkly").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Mfg.").unwrap();

        let base = UnicodeSentenceTokenizer::new().abbreviation_count();
        let tokenizer = UnicodeSentenceTokenizer::new()
            .with_abbreviations_file(file.path())
            .unwrap();
        assert_eq!(tokenizer.abbreviation_count(), base + 2);
        assert!(tokenizer.joins("Acme Mfg.", "Widgets"));
    }

    #[test]
    fn test_missing_abbreviations_file() {
        let result = UnicodeSentenceTokenizer::new()
            .with_abbreviations_file(Path::new("/nonexistent/abbreviations.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_covers_content() {
        let tokenizer = UnicodeSentenceTokenizer::new();
        for text in [
            "I love this!",
            "This is great. This is terrible.",
            "e.g. this works. And the U.S. Army agrees.",
            "Line one\n\nLine two. Line three?",
            "Version 2.0 shipped! Everyone cheered...",
        ] {
            let sentences = tokenizer.tokenize(text).unwrap();
            assert_well_formed(&sentences);
            assert_covers(text, &sentences);
        }
    }
}
