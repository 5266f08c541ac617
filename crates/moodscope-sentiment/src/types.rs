use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Compound score at or above which a message is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a message is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Three-way sentiment label derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels in display order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Map a compound score to a label.
    ///
    /// `>= 0.05` is Positive, `<= -0.05` is Negative, anything else
    /// (including NaN) is Neutral.
    #[must_use]
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw output of a polarity scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    /// Overall polarity in `[-1.0, 1.0]`.
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

impl PolarityScores {
    /// Scores for text with no polarity at all.
    pub const NEUTRAL: PolarityScores = PolarityScores {
        compound: 0.0,
        pos: 0.0,
        neu: 1.0,
        neg: 0.0,
    };
}

/// Label plus the score components it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    pub compound: f64,
    pub pos: f64,
    pub neu: f64,
    pub neg: f64,
}

impl From<PolarityScores> for SentimentResult {
    fn from(scores: PolarityScores) -> Self {
        Self {
            label: SentimentLabel::from_compound(scores.compound),
            compound: scores.compound,
            pos: scores.pos,
            neu: scores.neu,
            neg: scores.neg,
        }
    }
}

/// Emotion name to occurrence count, in insertion order.
///
/// Adding an emotion that is already present sums the counts and keeps the
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmotionCounts {
    entries: Vec<(String, u32)>,
}

impl EmotionCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, emotion: &str, count: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| name == emotion) {
            entry.1 = entry.1.saturating_add(count);
        } else {
            self.entries.push((emotion.to_string(), count));
        }
    }

    #[must_use]
    pub fn get(&self, emotion: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == emotion)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for EmotionCounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (emotion, count) in iter {
            counts.add(emotion.as_ref(), count);
        }
        counts
    }
}

impl Serialize for EmotionCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (emotion, count) in &self.entries {
            map.serialize_entry(emotion, count)?;
        }
        map.end()
    }
}

/// One normalized emotion score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionScore {
    pub emotion: String,
    /// Count divided by message word count, rounded to 4 decimals.
    pub score: f64,
}

/// Emotion scores ranked by descending score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmotionProfile(pub(crate) Vec<EmotionScore>);

impl EmotionProfile {
    /// The highest-ranked `n` entries (fewer if the profile is shorter).
    #[must_use]
    pub fn top(&self, n: usize) -> &[EmotionScore] {
        &self.0[..n.min(self.0.len())]
    }

    #[must_use]
    pub fn get(&self, emotion: &str) -> Option<f64> {
        self.0.iter().find(|e| e.emotion == emotion).map(|e| e.score)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmotionScore> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[EmotionScore] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a EmotionProfile {
    type Item = &'a EmotionScore;
    type IntoIter = std::slice::Iter<'a, EmotionScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Full result of analyzing one message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageAnalysis {
    pub message: String,
    pub sentiment: SentimentResult,
    /// Hits from the custom lexicon only (zero-count emotions omitted).
    pub custom_counts: EmotionCounts,
    /// Library and custom counts merged, normalized and ranked.
    pub emotions: EmotionProfile,
    /// Set when the emotion lookup failed and only custom emotions were used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_error: Option<String>,
}

impl MessageAnalysis {
    #[must_use]
    pub fn top_emotions(&self, n: usize) -> &[EmotionScore] {
        self.emotions.top(n)
    }
}
