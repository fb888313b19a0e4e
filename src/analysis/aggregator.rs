//! Aggregation of per-sentence results.

use crate::error::AnalysisError;
use crate::types::{round2, OverallResult, SentenceResult, SentimentCategory};

/// Combine sentence results into the overall assessment.
///
/// The means are taken over the rounded per-sentence values the client sees.
/// The category comes from the unrounded mean polarity; both means are
/// rounded afterwards.
pub fn aggregate(results: &[SentenceResult]) -> Result<OverallResult, AnalysisError> {
    if results.is_empty() {
        return Err(AnalysisError::NoSentencesFound);
    }

    let n = results.len() as f64;
    let polarity = results.iter().map(|r| r.polarity).sum::<f64>() / n;
    let subjectivity = results.iter().map(|r| r.subjectivity).sum::<f64>() / n;

    Ok(OverallResult {
        polarity: round2(polarity),
        subjectivity: round2(subjectivity),
        category: SentimentCategory::from_polarity(polarity),
    })
}
