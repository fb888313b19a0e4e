//! Lexicon-based sentiment model.

use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

use super::base::{Sentiment, SentimentModel};
use super::lexicon::{intensity_of, is_negation, sentiment_of};

/// Words after a negation within which a sentiment word is flipped.
const NEGATION_WINDOW: usize = 3;

/// Factor applied to the polarity of a negated sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

/// Factor applied per `!` to the preceding sentiment word.
const EXCLAMATION_FACTOR: f64 = 1.25;

/// Averages the lexicon scores of the sentiment words in a sentence.
///
/// Intensifiers scale the next sentiment word, negations flip and damp one
/// within [`NEGATION_WINDOW`] words, and each `!` strengthens the sentiment
/// word before it. A sentence with no sentiment words scores `(0.0, 0.0)`.
#[derive(Debug, Clone, Default)]
pub struct LexiconSentimentModel;

/// One scored sentiment word.
#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
}

impl LexiconSentimentModel {
    pub fn new() -> Self {
        Self
    }

    fn assess(&self, sentence: &str) -> Vec<Assessment> {
        let mut assessments: Vec<Assessment> = Vec::new();
        let mut intensity: Option<f64> = None;
        // Words seen since the last negation
        let mut since_negation: Option<usize> = None;

        for token in sentence.split_word_bounds() {
            if token == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = (last.polarity * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
                }
                continue;
            }

            if !token.chars().any(char::is_alphanumeric) {
                continue;
            }

            let word = token.replace('\u{2019}', "'").to_lowercase();

            if is_negation(&word) {
                since_negation = Some(0);
                intensity = None;
                continue;
            }

            if let Some(factor) = intensity_of(&word) {
                intensity = Some(intensity.unwrap_or(1.0) * factor);
                continue;
            }

            match sentiment_of(&word) {
                Some((polarity, subjectivity)) => {
                    let factor = intensity.take().unwrap_or(1.0);
                    let mut polarity = polarity * factor;
                    if since_negation.take().is_some() {
                        polarity *= NEGATION_FACTOR;
                    }
                    assessments.push(Assessment {
                        polarity: polarity.clamp(-1.0, 1.0),
                        subjectivity: (subjectivity * factor).clamp(0.0, 1.0),
                    });
                }
                None => {
                    intensity = None;
                    since_negation = since_negation
                        .map(|n| n + 1)
                        .filter(|&n| n < NEGATION_WINDOW);
                }
            }
        }

        assessments
    }
}

impl SentimentModel for LexiconSentimentModel {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn score(&self, sentence: &str) -> Result<Sentiment> {
        let assessments = self.assess(sentence);
        if assessments.is_empty() {
            return Ok(Sentiment::default());
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

        Ok(Sentiment::new(polarity, subjectivity))
    }
}
