//! Per-message analysis pipeline.

use crate::affect::{AffectLexicon, EmotionLookup};
use crate::classifier::SentimentClassifier;
use crate::combiner::{merge_counts, normalize};
use crate::error::SentimentError;
use crate::lexicon::Lexicon;
use crate::matcher::KeywordMatcher;
use crate::scorer::{PolarityScorer, ValenceScorer};
use crate::types::{EmotionCounts, MessageAnalysis};

/// Sentiment and emotion analyzer for single messages.
///
/// The polarity scorer, the emotion lookup and the custom lexicon are all
/// passed in at construction; the analyzer holds no other state and is safe
/// to share between threads when its collaborators are.
#[derive(Debug, Clone)]
pub struct Analyzer<S = ValenceScorer, E = AffectLexicon> {
    classifier: SentimentClassifier<S>,
    lookup: E,
    matcher: KeywordMatcher,
}

impl Analyzer {
    /// Analyzer backed by the bundled [`ValenceScorer`] and [`AffectLexicon`].
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Pattern`] if a lexicon keyword cannot be compiled.
    pub fn with_defaults(lexicon: &Lexicon) -> Result<Self, SentimentError> {
        Self::new(ValenceScorer::new(), AffectLexicon::new(), lexicon)
    }
}

impl<S: PolarityScorer, E: EmotionLookup> Analyzer<S, E> {
    /// # Errors
    ///
    /// Returns [`SentimentError::Pattern`] if a lexicon keyword cannot be compiled.
    pub fn new(scorer: S, lookup: E, lexicon: &Lexicon) -> Result<Self, SentimentError> {
        Ok(Self {
            classifier: SentimentClassifier::new(scorer),
            lookup,
            matcher: KeywordMatcher::new(lexicon)?,
        })
    }

    /// Analyze one message.
    ///
    /// A failing emotion lookup does not fail the analysis: it is logged,
    /// recorded in [`MessageAnalysis::emotion_error`], and only custom
    /// emotions are profiled.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::EmptyMessage`] for blank text (nothing else
    /// runs), or [`SentimentError::Scorer`] if the polarity scorer fails.
    pub fn analyze(&self, text: &str) -> Result<MessageAnalysis, SentimentError> {
        let sentiment = self.classifier.classify(text)?;

        let (library_counts, emotion_error) = match self.lookup.raw_emotion_counts(text) {
            Ok(counts) => (counts, None),
            Err(e) => {
                tracing::warn!(error = %e, "emotion lookup failed; using custom emotions only");
                (
                    EmotionCounts::new(),
                    Some(SentimentError::EmotionLookup(e.0).to_string()),
                )
            }
        };

        let custom_counts = self.matcher.count(text);
        let merged = merge_counts(&library_counts, &custom_counts);
        let emotions = normalize(&merged, text);

        tracing::debug!(
            label = %sentiment.label,
            compound = sentiment.compound,
            emotions = emotions.len(),
            "message analyzed"
        );

        Ok(MessageAnalysis {
            message: text.to_string(),
            sentiment,
            custom_counts,
            emotions,
            emotion_error,
        })
    }
}
