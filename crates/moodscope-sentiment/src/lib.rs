//! Sentiment and emotion scoring for free-form messages.
//!
//! A message is classified as Positive, Neutral or Negative from the compound
//! score of a [`PolarityScorer`], and profiled for emotions by merging the raw
//! counts of an [`EmotionLookup`] with whole-word hits from a user-supplied
//! custom [`Lexicon`]. Counts are normalized by message word count and ranked.
//! [`run_batch`] applies the same pipeline to every row of a CSV collection.

pub mod affect;
pub mod batch;
pub mod classifier;
pub mod combiner;
pub mod error;
pub mod lexicon;
pub mod matcher;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod types;

pub use affect::{AffectLexicon, EmotionLookup};
pub use batch::{run_batch, BatchAggregate, BatchOptions, EmotionTally, LabelCounts};
pub use classifier::SentimentClassifier;
pub use combiner::{merge_counts, normalize, word_count};
pub use error::{CollaboratorError, SentimentError};
pub use lexicon::{load_custom_lexicon, Lexicon, LexiconStatus};
pub use matcher::KeywordMatcher;
pub use pipeline::Analyzer;
pub use report::{format_block, write_report, DIVIDER};
pub use scorer::{PolarityScorer, ValenceScorer};
pub use types::{
    EmotionCounts, EmotionProfile, EmotionScore, MessageAnalysis, PolarityScores,
    SentimentLabel, SentimentResult,
};
