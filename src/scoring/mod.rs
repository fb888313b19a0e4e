//! Sentence sentiment scoring.

mod base;
pub mod lexicon;
mod lexicon_model;

pub use base::{Sentiment, SentimentModel};
pub use lexicon_model::LexiconSentimentModel;
