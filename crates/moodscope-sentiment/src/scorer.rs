//! Polarity scoring collaborator and the bundled valence-lexicon scorer.

use crate::error::CollaboratorError;
use crate::types::PolarityScores;

/// Produces `{compound, pos, neu, neg}` polarity scores for a message.
///
/// Implementations are treated as black boxes by the pipeline. `compound`
/// must lie in `[-1.0, 1.0]` and `pos + neu + neg` should sum to about 1.
pub trait PolarityScorer {
    /// # Errors
    ///
    /// Returns [`CollaboratorError`] if the text cannot be scored.
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, CollaboratorError>;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> Result<PolarityScores, CollaboratorError>,
{
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, CollaboratorError> {
        self(text)
    }
}

/// Word valences on a `[-4.0, 4.0]` scale. Keys are lowercase single words.
pub(crate) const VALENCE: &[(&str, f64)] = &[
    // Positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("calm", 1.3),
    ("cheerful", 2.5),
    ("confident", 2.2),
    ("delicious", 2.7),
    ("delighted", 3.2),
    ("excellent", 3.2),
    ("excited", 1.4),
    ("fantastic", 2.6),
    ("fine", 0.8),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("hope", 1.9),
    ("joy", 2.8),
    ("kind", 2.4),
    ("like", 1.5),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("relieved", 1.5),
    ("safe", 1.9),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("win", 2.8),
    ("wonderful", 2.7),
    // Negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("anxious", -1.0),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broken", -1.4),
    ("cry", -2.1),
    ("dangerous", -2.1),
    ("depressed", -2.3),
    ("disappointed", -1.9),
    ("disgusting", -2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fear", -2.2),
    ("frustrated", -2.4),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("lonely", -1.8),
    ("mad", -2.2),
    ("miserable", -2.2),
    ("pain", -2.3),
    ("problem", -1.7),
    ("sad", -2.1),
    ("scared", -1.9),
    ("sick", -2.3),
    ("sorry", -0.3),
    ("terrible", -2.5),
    ("tired", -1.9),
    ("ugly", -2.3),
    ("upset", -1.6),
    ("worried", -1.2),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Words that intensify (positive) or dampen (negative) the next sentiment word.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("very", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

const NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "didnt", "doesnt", "dont", "isnt", "never", "no", "nobody",
    "none", "nor", "not", "nothing", "wasnt", "without", "wont", "wouldnt",
];

/// How many preceding tokens a booster or negation reaches.
const LOOKBACK: usize = 3;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence-lexicon polarity scorer.
///
/// Sums word valences with booster and negation adjustments, adds emphasis
/// for `!`, and squashes the sum into `[-1, 1]` for the compound score.
/// `pos`, `neu` and `neg` are the shares of positive, neutral and negative
/// weight across all tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValenceScorer;

impl ValenceScorer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score `text`. Text with no words scores as fully neutral.
    #[must_use]
    pub fn score(&self, text: &str) -> PolarityScores {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(normalize_token)
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.is_empty() {
            return PolarityScores::NEUTRAL;
        }

        let sentiments: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| token_valence(&tokens, i, token))
            .collect();

        let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
        #[allow(clippy::cast_precision_loss)]
        let emphasis = exclamations as f64 * EXCLAMATION_BOOST;

        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let mut pos_sum = 0.0_f64;
        let mut neg_sum = 0.0_f64;
        let mut neu_count = 0.0_f64;
        for &s in &sentiments {
            if s > 0.0 {
                pos_sum += s + 1.0;
            } else if s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        PolarityScores {
            compound: round_to(compound, 4),
            pos: round_to((pos_sum / total).abs(), 3),
            neu: round_to((neu_count / total).abs(), 3),
            neg: round_to((neg_sum / total).abs(), 3),
        }
    }
}

impl PolarityScorer for ValenceScorer {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, CollaboratorError> {
        Ok(self.score(text))
    }
}

/// Lowercase and strip surrounding punctuation; inner apostrophes are dropped
/// so "don't" and "dont" look the same.
fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .flat_map(char::to_lowercase)
        .collect()
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, weight)| *weight)
}

fn token_valence(tokens: &[String], i: usize, token: &str) -> f64 {
    let Some(mut valence) = lookup(VALENCE, token) else {
        return 0.0;
    };

    let start = i.saturating_sub(LOOKBACK);
    for (distance, prev) in tokens[start..i].iter().rev().enumerate() {
        if let Some(boost) = lookup(BOOSTERS, prev) {
            let decay = match distance {
                0 => 1.0,
                1 => 0.95,
                _ => 0.9,
            };
            let scaled = boost * decay;
            valence += if valence > 0.0 { scaled } else { -scaled };
        }
    }

    if tokens[start..i].iter().any(|prev| NEGATIONS.contains(&prev.as_str())) {
        valence *= NEGATION_SCALAR;
    }

    valence
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
