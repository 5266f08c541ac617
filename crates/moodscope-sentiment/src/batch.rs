//! Batch analysis over a CSV collection of messages.
//!
//! Rows are processed in input order. Blank messages are skipped and rows
//! that fail to decode or analyze are logged and counted, so one bad row
//! never aborts the batch. Only a missing `message` column is fatal.

use std::io::Read;

use serde::Serialize;

use crate::affect::EmotionLookup;
use crate::error::SentimentError;
use crate::pipeline::Analyzer;
use crate::report::format_block;
use crate::scorer::PolarityScorer;
use crate::types::{MessageAnalysis, SentimentLabel};

/// Name of the required input column, matched case-insensitively.
pub const MESSAGE_COLUMN: &str = "message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// How many top-ranked emotions per message feed the emotion tally and report.
    pub top_emotions: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { top_emotions: 3 }
    }
}

/// Frequency of each sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Labels with their counts, in Positive, Neutral, Negative order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        SentimentLabel::ALL
            .into_iter()
            .map(|label| (label, self.get(label)))
    }
}

/// Emotion name frequencies in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmotionTally(Vec<(String, usize)>);

impl EmotionTally {
    pub fn record(&mut self, emotion: &str) {
        if let Some(entry) = self.0.iter_mut().find(|(name, _)| name == emotion) {
            entry.1 += 1;
        } else {
            self.0.push((emotion.to_string(), 1));
        }
    }

    #[must_use]
    pub fn get(&self, emotion: &str) -> usize {
        self.0
            .iter()
            .find(|(name, _)| name == emotion)
            .map_or(0, |(_, count)| *count)
    }

    /// Entries sorted by count, highest first; ties keep first-seen order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.0.iter().map(|(name, count)| (name.as_str(), *count)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
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

/// Aggregated outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchAggregate {
    /// Rows analyzed successfully.
    pub processed: usize,
    /// Rows with a blank or missing message.
    pub skipped: usize,
    /// Rows that could not be decoded or analyzed.
    pub failed: usize,
    pub label_counts: LabelCounts,
    pub emotion_counts: EmotionTally,
    /// One [`format_block`] per processed row, in input order.
    #[serde(skip)]
    pub report: String,
}

impl BatchAggregate {
    fn record(&mut self, analysis: &MessageAnalysis, top_emotions: usize) {
        self.processed += 1;
        self.label_counts.record(analysis.sentiment.label);
        for emotion in analysis.top_emotions(top_emotions) {
            self.emotion_counts.record(&emotion.emotion);
        }
        self.report.push_str(&format_block(analysis, top_emotions));
    }
}

/// Analyze every row of a CSV collection that has a `message` column.
///
/// Other columns are ignored. Rows are read sequentially and the report keeps
/// input order.
///
/// # Errors
///
/// Returns [`SentimentError::MissingMessageColumn`] if no header matches
/// `message` (ignoring case and surrounding whitespace), or
/// [`SentimentError::Csv`] if the header row cannot be read. Row-level
/// problems are counted in the aggregate instead.
pub fn run_batch<S, E, R>(
    analyzer: &Analyzer<S, E>,
    reader: R,
    options: &BatchOptions,
) -> Result<BatchAggregate, SentimentError>
where
    S: PolarityScorer,
    E: EmotionLookup,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let Some(column) = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(MESSAGE_COLUMN))
    else {
        return Err(SentimentError::MissingMessageColumn {
            columns: headers.iter().map(ToString::to_string).collect(),
        });
    };

    let mut aggregate = BatchAggregate::default();
    for (index, record) in rdr.records().enumerate() {
        let row = index + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(row, error = %e, "failed to read batch row; skipping");
                aggregate.failed += 1;
                continue;
            }
        };

        let Some(message) = record.get(column).filter(|m| !m.trim().is_empty()) else {
            tracing::debug!(row, "blank message; skipping row");
            aggregate.skipped += 1;
            continue;
        };

        match analyzer.analyze(message) {
            Ok(analysis) => aggregate.record(&analysis, options.top_emotions),
            Err(e) => {
                tracing::warn!(row, error = %e, "failed to analyze batch row; skipping");
                aggregate.failed += 1;
            }
        }
    }

    if aggregate.failed > 0 {
        tracing::warn!(
            failed = aggregate.failed,
            processed = aggregate.processed,
            "some batch rows failed"
        );
    }
    tracing::info!(
        processed = aggregate.processed,
        skipped = aggregate.skipped,
        failed = aggregate.failed,
        "batch complete"
    );

    Ok(aggregate)
}
