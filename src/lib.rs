//! Sentiment Analyzer Library
//!
//! Splits free text into sentences, scores each sentence for polarity and
//! subjectivity, and aggregates the scores into an overall assessment.

pub mod analysis;
pub mod api;
pub mod error;
pub mod scoring;
pub mod splitter;
pub mod types;

pub use analysis::SentimentPipeline;
pub use error::AnalysisError;
pub use scoring::{LexiconSentimentModel, Sentiment, SentimentModel};
pub use splitter::{FallbackSplitter, SentenceSplitter, SentenceTokenizer, UnicodeSentenceTokenizer};
pub use types::{AnalysisResponse, OverallResult, SentenceResult, SentimentCategory, ServiceConfig};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analysis::*;
    pub use crate::error::AnalysisError;
    pub use crate::scoring::*;
    pub use crate::splitter::*;
    pub use crate::types::*;
}

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default maximum input accepted by the primary sentence tokenizer (1MB)
pub const DEFAULT_TOKENIZER_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Default maximum request body size (2MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Characters that terminate a sentence in the fallback splitter
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
