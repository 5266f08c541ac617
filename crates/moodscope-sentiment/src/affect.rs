//! Library emotion lookup collaborator and the bundled affect vocabulary.

use crate::error::CollaboratorError;
use crate::types::EmotionCounts;

/// Maps text to raw emotion counts over a fixed emotion vocabulary.
///
/// Counts must be non-negative occurrence counts, not scores; the pipeline
/// normalizes them. Emotion order in the returned map is significant for
/// tie-breaking when scores are ranked.
pub trait EmotionLookup {
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the lookup cannot run on `text`.
    fn raw_emotion_counts(&self, text: &str) -> Result<EmotionCounts, CollaboratorError>;
}

impl<F> EmotionLookup for F
where
    F: Fn(&str) -> Result<EmotionCounts, CollaboratorError>,
{
    fn raw_emotion_counts(&self, text: &str) -> Result<EmotionCounts, CollaboratorError> {
        self(text)
    }
}

/// The emotion vocabulary of [`AffectLexicon`].
pub const AFFECT_EMOTIONS: [&str; 10] = [
    "fear",
    "anger",
    "anticipation",
    "trust",
    "surprise",
    "positive",
    "negative",
    "sadness",
    "disgust",
    "joy",
];

/// Word to affect categories. Category lists are alphabetical.
const AFFECT_WORDS: &[(&str, &[&str])] = &[
    ("abandon", &["fear", "negative", "sadness"]),
    ("accident", &["fear", "negative", "sadness", "surprise"]),
    ("afraid", &["fear", "negative"]),
    ("anger", &["anger", "negative"]),
    ("angry", &["anger", "disgust", "negative"]),
    ("anxious", &["anticipation", "fear", "negative"]),
    ("awful", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("beautiful", &["joy", "positive"]),
    ("birthday", &["anticipation", "joy", "positive", "surprise"]),
    ("blame", &["anger", "disgust", "negative"]),
    ("calm", &["positive"]),
    ("celebrate", &["anticipation", "joy", "positive"]),
    ("cheerful", &["joy", "positive", "surprise"]),
    ("confident", &["joy", "positive", "trust"]),
    ("cry", &["negative", "sadness"]),
    ("danger", &["fear", "negative", "sadness"]),
    ("death", &["anger", "anticipation", "disgust", "fear", "negative", "sadness", "surprise"]),
    ("delight", &["anticipation", "joy", "positive"]),
    ("depressed", &["anger", "fear", "negative", "sadness"]),
    ("disappointed", &["anger", "disgust", "negative", "sadness"]),
    ("disgusting", &["anger", "disgust", "fear", "negative"]),
    ("dread", &["anticipation", "fear", "negative"]),
    ("eager", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("excited", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("fail", &["disgust", "fear", "negative", "sadness"]),
    ("failure", &["disgust", "fear", "negative", "sadness"]),
    ("faith", &["anticipation", "joy", "positive", "trust"]),
    ("fear", &["anger", "fear", "negative"]),
    ("friend", &["joy", "positive", "trust"]),
    ("furious", &["anger", "disgust", "negative"]),
    ("gift", &["anticipation", "joy", "positive", "surprise"]),
    ("good", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("grateful", &["positive"]),
    ("grief", &["negative", "sadness"]),
    ("happy", &["anticipation", "joy", "positive", "trust"]),
    ("hate", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("honest", &["anger", "disgust", "fear", "joy", "positive", "sadness", "trust"]),
    ("hope", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("horrible", &["anger", "disgust", "fear", "negative"]),
    ("hurt", &["anger", "fear", "negative", "sadness"]),
    ("jealous", &["anger", "disgust", "negative"]),
    ("joy", &["joy", "positive", "trust"]),
    ("kind", &["joy", "positive", "trust"]),
    ("lonely", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("love", &["joy", "positive"]),
    ("lucky", &["joy", "positive", "surprise"]),
    ("mad", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("miss", &["negative", "sadness"]),
    ("nervous", &["anticipation", "fear", "negative"]),
    ("pain", &["fear", "negative", "sadness"]),
    ("panic", &["fear", "negative"]),
    ("peace", &["anticipation", "joy", "positive", "trust"]),
    ("pleasant", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("proud", &["anticipation", "joy", "positive", "trust"]),
    ("rage", &["anger", "negative"]),
    ("reliable", &["positive", "trust"]),
    ("sad", &["negative", "sadness"]),
    ("scared", &["fear", "negative"]),
    ("shock", &["anger", "fear", "negative", "surprise"]),
    ("sick", &["disgust", "negative", "sadness"]),
    ("smile", &["joy", "positive", "surprise", "trust"]),
    ("sorrow", &["negative", "sadness"]),
    ("sudden", &["surprise"]),
    ("surprise", &["fear", "joy", "positive", "surprise"]),
    ("terrible", &["anger", "disgust", "fear", "negative", "sadness"]),
    ("terror", &["fear", "negative"]),
    ("thankful", &["positive"]),
    ("threat", &["anger", "fear", "negative"]),
    ("today", &["anticipation"]),
    ("trust", &["trust"]),
    ("ugly", &["disgust", "negative"]),
    ("unexpected", &["anticipation", "fear", "joy", "negative", "positive", "surprise"]),
    ("upset", &["anger", "negative", "sadness"]),
    ("vomit", &["disgust", "negative"]),
    ("wait", &["anticipation", "negative"]),
    ("win", &["anticipation", "joy", "positive", "surprise", "trust"]),
    ("wonderful", &["joy", "positive", "surprise", "trust"]),
    ("worried", &["anticipation", "fear", "negative", "sadness"]),
    ("wow", &["surprise"]),
];

/// Bundled word-level affect vocabulary.
///
/// Walks the alphabetic words of a message in order and adds one to every
/// category of every known word, so categories appear in first-seen order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffectLexicon;

impl AffectLexicon {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn counts(&self, text: &str) -> EmotionCounts {
        let lowered = text.to_lowercase();
        let mut counts = EmotionCounts::new();
        for word in lowered
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| !w.is_empty())
        {
            if let Some((_, emotions)) = AFFECT_WORDS.iter().find(|(w, _)| *w == word) {
                for emotion in *emotions {
                    counts.add(emotion, 1);
                }
            }
        }
        counts
    }
}

impl EmotionLookup for AffectLexicon {
    fn raw_emotion_counts(&self, text: &str) -> Result<EmotionCounts, CollaboratorError> {
        Ok(self.counts(text))
    }
}
