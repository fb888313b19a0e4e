//! Primary/fallback composition of sentence tokenizers.

use tracing::{info, warn};

use super::base::{SentenceTokenizer, UnavailableTokenizer};
use super::fallback::FallbackSplitter;
use super::unicode_tokenizer::UnicodeSentenceTokenizer;
use crate::types::{ServiceConfig, TokenizerKind};

/// Splits text with a primary tokenizer and recovers from any of its
/// failures with the [`FallbackSplitter`].
///
/// There is exactly one fallback attempt per call and no retry of the
/// primary.
pub struct SentenceSplitter {
    primary: Box<dyn SentenceTokenizer>,
    fallback: FallbackSplitter,
}

impl SentenceSplitter {
    /// Create a splitter around the given primary tokenizer.
    pub fn new(primary: Box<dyn SentenceTokenizer>) -> Self {
        Self {
            primary,
            fallback: FallbackSplitter::new(),
        }
    }

    /// Build the splitter selected by the configuration.
    ///
    /// An abbreviations file that cannot be read leaves the unicode tokenizer
    /// unavailable; every request is then split by the fallback.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let primary: Box<dyn SentenceTokenizer> = match config.tokenizer {
            TokenizerKind::Simple => Box::new(FallbackSplitter::new()),
            TokenizerKind::Unicode => {
                let tokenizer = UnicodeSentenceTokenizer::new()
                    .with_max_input_bytes(config.tokenizer_max_input_bytes);
                match &config.abbreviations_file {
                    None => Box::new(tokenizer),
                    Some(path) => match tokenizer.with_abbreviations_file(path) {
                        Ok(tokenizer) => {
                            info!(
                                path = %path.display(),
                                abbreviations = tokenizer.abbreviation_count(),
                                "Loaded abbreviations"
                            );
                            Box::new(tokenizer)
                        }
                        Err(e) => {
                            warn!(
                                error = %format!("{e:#}"),
                                "Unicode sentence tokenizer unavailable, using fallback splitter"
                            );
                            Box::new(UnavailableTokenizer::new(format!("{e:#}")))
                        }
                    },
                }
            }
        };

        Self::new(primary)
    }

    /// Name of the primary tokenizer.
    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    /// One-line description of the primary tokenizer.
    pub fn primary_description(&self) -> &'static str {
        self.primary.description()
    }

    /// Split text into sentences. Never fails.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self.primary.tokenize(text) {
            Ok(sentences) => sentences,
            Err(e) => {
                warn!(
                    tokenizer = self.primary.name(),
                    error = %e,
                    "Primary sentence tokenizer failed, using fallback"
                );
                self.fallback.split(text)
            }
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(Box::new(UnicodeSentenceTokenizer::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::base::{assert_covers, assert_well_formed};
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    struct FailingTokenizer;

    impl SentenceTokenizer for FailingTokenizer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn tokenize<'a>(&self, _text: &'a str) -> Result<Vec<&'a str>> {
            anyhow::bail!("tokenizer data not found")
        }
    }

    #[test]
    fn test_uses_primary_when_it_succeeds() {
        let splitter = SentenceSplitter::default();
        // The fallback would cut after "Dr."
        assert_eq!(
            splitter.split("Dr. Smith is here. Hello!"),
            vec!["Dr. Smith is here.", "Hello!"]
        );
    }

    #[test]
    fn test_falls_back_on_primary_error() {
        let splitter = SentenceSplitter::new(Box::new(FailingTokenizer));
        assert_eq!(
            splitter.split("Dr. Smith is here. Hello!"),
            vec!["Dr.", "Smith is here.", "Hello!"]
        );
    }

    #[test]
    fn test_falls_back_on_oversized_input() {
        let config = ServiceConfig {
            tokenizer_max_input_bytes: 8,
            ..Default::default()
        };
        let splitter = SentenceSplitter::from_config(&config);
        assert_eq!(splitter.primary_name(), "unicode");
        assert_eq!(splitter.split("Mr. Big. Done"), vec!["Mr.", "Big.", "Done"]);
    }

    #[test]
    fn test_simple_config_uses_scan() {
        let config = ServiceConfig {
            tokenizer: TokenizerKind::Simple,
            ..Default::default()
        };
        let splitter = SentenceSplitter::from_config(&config);
        assert_eq!(splitter.primary_name(), "simple");
        assert_eq!(
            splitter.primary_description(),
            "Splits after every terminal punctuation mark"
        );
        assert_eq!(splitter.split("Pi is 3.14 exactly."), vec!["Pi is 3.", "14 exactly."]);
    }

    #[test]
    fn test_unreadable_abbreviations_file_makes_primary_unavailable() {
        let config = ServiceConfig {
            abbreviations_file: Some(PathBuf::from("/nonexistent/abbreviations.txt")),
            ..Default::default()
        };
        let splitter = SentenceSplitter::from_config(&config);
        assert_eq!(splitter.primary_name(), "unavailable");
        assert_eq!(
            splitter.primary_description(),
            "Placeholder for a tokenizer that could not be loaded"
        );
        assert_eq!(splitter.split("One. Two."), vec!["One.", "Two."]);
    }

    #[test]
    fn test_never_returns_empty_for_content() {
        let primary = SentenceSplitter::default();
        let fallback = SentenceSplitter::new(Box::new(FailingTokenizer));
        for text in ["x", "...", "Hello world", "A. B. C.", "?!", "Ünïcödé text"] {
            for splitter in [&primary, &fallback] {
                let sentences = splitter.split(text);
                assert_well_formed(&sentences);
                assert_covers(text, &sentences);
            }
        }
    }
}
