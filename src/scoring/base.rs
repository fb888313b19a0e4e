//! Base trait for sentiment models.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Unrounded sentiment of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    /// -1.0 (negative) to 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective)
    pub subjectivity: f64,
}

impl Sentiment {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    /// Clamp both values into their ranges, rejecting NaN and infinities.
    pub fn checked(self) -> Result<Self> {
        if !self.polarity.is_finite() || !self.subjectivity.is_finite() {
            anyhow::bail!(
                "model returned non-finite scores (polarity {}, subjectivity {})",
                self.polarity,
                self.subjectivity
            );
        }
        Ok(Self {
            polarity: self.polarity.clamp(-1.0, 1.0),
            subjectivity: self.subjectivity.clamp(0.0, 1.0),
        })
    }
}

/// A model that scores one sentence at a time.
///
/// Implementations must be pure: the same sentence always yields the same
/// scores and no state is carried between calls.
pub trait SentimentModel: Send + Sync {
    /// Get the name of this model.
    fn name(&self) -> &'static str;

    /// Score a single sentence.
    fn score(&self, sentence: &str) -> Result<Sentiment>;
}
