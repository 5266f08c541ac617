use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    /// The message was empty or whitespace-only; nothing was analyzed.
    #[error("message is empty; enter some text to analyze")]
    EmptyMessage,

    /// The custom lexicon resource does not exist.
    #[error("custom lexicon not found at {}", .path.display())]
    LexiconUnavailable { path: PathBuf },

    /// The custom lexicon is missing its required columns.
    #[error("custom lexicon schema error: {0}")]
    LexiconSchema(String),

    #[error("custom lexicon parse error: {0}")]
    LexiconParse(String),

    /// Batch input has no `message` column.
    #[error("no 'message' column found (columns: {})", .columns.join(", "))]
    MissingMessageColumn { columns: Vec<String> },

    #[error("polarity scorer failed: {0}")]
    Scorer(String),

    #[error("emotion lookup failed: {0}")]
    EmotionLookup(String),

    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure reported by an external scoring collaborator.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct CollaboratorError(pub String);
