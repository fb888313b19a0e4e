//! Analysis results and response payloads.

use serde::{Deserialize, Serialize};

/// Sentiment category derived from the sign of a polarity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// Categorize a polarity value.
    ///
    /// Callers pass the unrounded value, so a polarity that displays as
    /// `0.0` can still be `Positive` or `Negative`.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentCategory::Positive
        } else if polarity < 0.0 {
            SentimentCategory::Negative
        } else {
            SentimentCategory::Neutral
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentCategory::Positive => write!(f, "Positive"),
            SentimentCategory::Negative => write!(f, "Negative"),
            SentimentCategory::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Round to 2 decimal places.
///
/// Rounds the exact binary value with ties to even, the same result as
/// Python's `round(x, 2)`: `0.625` becomes `0.62`, `2.675` (stored just
/// below) becomes `2.67`. Negative zero is folded into `0.0` so it never
/// reaches the wire as `-0.0`.
pub fn round2(value: f64) -> f64 {
    let rounded = format!("{value:.2}").parse::<f64>().unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Sentiment of one sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceResult {
    /// The sentence as it appears in the input
    pub sentence: String,

    /// Polarity rounded to 2 decimals, in [-1, 1]
    pub polarity: f64,

    /// Subjectivity rounded to 2 decimals, in [0, 1]
    pub subjectivity: f64,

    /// Category of the unrounded polarity
    pub category: SentimentCategory,
}

impl SentenceResult {
    /// Build a result from unrounded scores.
    pub fn from_scores(sentence: &str, polarity: f64, subjectivity: f64) -> Self {
        Self {
            sentence: sentence.to_string(),
            polarity: round2(polarity),
            subjectivity: round2(subjectivity),
            category: SentimentCategory::from_polarity(polarity),
        }
    }
}

/// Sentiment of the whole text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub category: SentimentCategory,
}

/// Successful response of `POST /api/analyze-sentiment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub sentence_analysis: Vec<SentenceResult>,
    pub overall_analysis: OverallResult,
}

/// Error payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
