//! Three-way sentiment classification over an injected polarity scorer.

use crate::error::SentimentError;
use crate::scorer::PolarityScorer;
use crate::types::SentimentResult;

/// Wraps a [`PolarityScorer`] and labels its compound score.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier<S> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score `text` and attach a [`SentimentLabel`](crate::SentimentLabel).
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::EmptyMessage`] for blank text without
    /// calling the scorer, or [`SentimentError::Scorer`] if the scorer fails.
    pub fn classify(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        if text.trim().is_empty() {
            return Err(SentimentError::EmptyMessage);
        }
        let scores = self
            .scorer
            .polarity_scores(text)
            .map_err(|e| SentimentError::Scorer(e.0))?;
        Ok(SentimentResult::from(scores))
    }
}
