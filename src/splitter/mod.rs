//! Sentence splitting strategies.

mod base;
mod fallback;
mod sentence_splitter;
mod unicode_tokenizer;

pub use base::{SentenceTokenizer, UnavailableTokenizer};
pub use fallback::FallbackSplitter;
pub use sentence_splitter::SentenceSplitter;
pub use unicode_tokenizer::UnicodeSentenceTokenizer;
