//! Core types for the sentiment service.

mod config;
mod result;

pub use config::{LogFormat, ServiceConfig, TokenizerKind};
pub use result::{
    round2, AnalysisResponse, ErrorResponse, OverallResult, SentenceResult, SentimentCategory,
};
