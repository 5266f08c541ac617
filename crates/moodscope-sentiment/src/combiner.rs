//! Merge emotion counts from both sources and normalize them by word count.

use crate::types::{EmotionCounts, EmotionProfile, EmotionScore};

/// Sum two count maps into a new one.
///
/// Keys from `library` come first in their original order, followed by keys
/// only present in `custom`. Shared keys are summed, never overwritten.
#[must_use]
pub fn merge_counts(library: &EmotionCounts, custom: &EmotionCounts) -> EmotionCounts {
    library.iter().chain(custom.iter()).collect()
}

/// Number of whitespace-delimited tokens in `text`, floored at 1.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count().max(1)
}

/// Divide each count by the word count of `text`, round to 4 decimals and
/// rank by descending score. Equal scores keep their merge order.
#[must_use]
pub fn normalize(counts: &EmotionCounts, text: &str) -> EmotionProfile {
    #[allow(clippy::cast_precision_loss)]
    let words = word_count(text) as f64;

    let mut scores: Vec<EmotionScore> = counts
        .iter()
        .map(|(emotion, count)| EmotionScore {
            emotion: emotion.to_string(),
            score: round4(f64::from(count) / words),
        })
        .collect();

    // Stable sort: ties stay in insertion order.
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    EmotionProfile(scores)
}

// Ties go to the even digit.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round_ties_even() / 10_000.0
}
