//! Split, score and aggregate in one request-scoped call.

use std::sync::Arc;

use tracing::debug;

use super::aggregator::aggregate;
use crate::error::AnalysisError;
use crate::scoring::{LexiconSentimentModel, SentimentModel};
use crate::splitter::SentenceSplitter;
use crate::types::{AnalysisResponse, SentenceResult, ServiceConfig};

/// The sentiment analysis pipeline.
///
/// Holds no mutable state; one instance serves every request.
pub struct SentimentPipeline {
    splitter: SentenceSplitter,
    model: Arc<dyn SentimentModel>,
}

impl SentimentPipeline {
    /// Create a pipeline from its parts.
    pub fn new(splitter: SentenceSplitter, model: Arc<dyn SentimentModel>) -> Self {
        Self { splitter, model }
    }

    /// Build the pipeline selected by the configuration, scoring with the
    /// built-in lexicon model.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            SentenceSplitter::from_config(config),
            Arc::new(LexiconSentimentModel::new()),
        )
    }

    /// Name of the sentiment model in use.
    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Name of the primary sentence tokenizer.
    pub fn tokenizer_name(&self) -> &'static str {
        self.splitter.primary_name()
    }

    /// Description of the primary sentence tokenizer.
    pub fn tokenizer_description(&self) -> &'static str {
        self.splitter.primary_description()
    }

    /// Analyze already validated, trimmed text.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResponse, AnalysisError> {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            return Err(AnalysisError::NoSentencesFound);
        }

        let sentence_analysis = sentences
            .iter()
            .map(|sentence| self.score_sentence(sentence))
            .collect::<Result<Vec<_>, _>>()?;

        let overall_analysis = aggregate(&sentence_analysis)?;

        debug!(
            sentences = sentence_analysis.len(),
            polarity = overall_analysis.polarity,
            category = %overall_analysis.category,
            "Analyzed text"
        );

        Ok(AnalysisResponse {
            sentence_analysis,
            overall_analysis,
        })
    }

    fn score_sentence(&self, sentence: &str) -> Result<SentenceResult, AnalysisError> {
        let sentiment = self
            .model
            .score(sentence)
            .and_then(|s| s.checked())
            .map_err(|e| AnalysisError::ScoringFailure(format!("{e:#}")))?;

        Ok(SentenceResult::from_scores(
            sentence,
            sentiment.polarity,
            sentiment.subjectivity,
        ))
    }
}

impl Default for SentimentPipeline {
    fn default() -> Self {
        Self::from_config(&ServiceConfig::default())
    }
}
