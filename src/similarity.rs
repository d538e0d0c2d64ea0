//! Similarity measures over sparse term vectors.
//!
//! Every function treats a key missing from one side as weight 0.

use serde::{Deserialize, Serialize};

use crate::document::SparseVector;
use crate::error::{MailtabError, Result};

/// Dot product, iterating the smaller of the two vectors.
pub fn dot(x: &SparseVector, y: &SparseVector) -> f64 {
    let (small, large) = if x.len() < y.len() { (x, y) } else { (y, x) };
    small
        .iter()
        .filter_map(|(key, a)| large.get(key).map(|b| a * b))
        .sum()
}

/// Euclidean norm.
pub fn norm(x: &SparseVector) -> f64 {
    x.values().map(|v| v * v).sum::<f64>().sqrt()
}

/// Sum of all weights.
pub fn total(x: &SparseVector) -> f64 {
    x.values().sum()
}

/// Cosine similarity. Returns 0 whenever the dot product is 0.
pub fn cosine(x: &SparseVector, y: &SparseVector) -> f64 {
    let num = dot(x, y);
    if num == 0.0 {
        return 0.0;
    }
    num / (norm(x) * norm(y))
}

/// Dice coefficient. Returns 0 whenever the dot product is 0.
pub fn dice(x: &SparseVector, y: &SparseVector) -> f64 {
    let num = 2.0 * dot(x, y);
    if num == 0.0 {
        return 0.0;
    }
    num / (total(x) + total(y))
}

/// Jaccard coefficient. 0 when the dot product is 0, 1 when the denominator is 0.
pub fn jaccard(x: &SparseVector, y: &SparseVector) -> f64 {
    let num = dot(x, y);
    if num == 0.0 {
        return 0.0;
    }
    let denom = total(x) + total(y) - num;
    if denom == 0.0 {
        return 1.0;
    }
    num / denom
}

/// Overlap coefficient. Returns 0 whenever the dot product is 0.
pub fn overlap(x: &SparseVector, y: &SparseVector) -> f64 {
    let num = dot(x, y);
    if num == 0.0 {
        return 0.0;
    }
    num / total(x).min(total(y))
}

/// A similarity score between two sparse vectors; higher is more similar.
pub trait Similarity: Send + Sync {
    fn score(&self, x: &SparseVector, y: &SparseVector) -> f64;

    /// Get the name of this measure.
    fn name(&self) -> &'static str;
}

/// The built-in similarity measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMetric {
    /// Normalized dot product
    #[default]
    Cosine,
    /// Dice coefficient
    Dice,
    /// Jaccard coefficient
    Jaccard,
    /// Overlap coefficient
    Overlap,
}

impl SimilarityMetric {
    pub const ALL: [SimilarityMetric; 4] = [
        SimilarityMetric::Cosine,
        SimilarityMetric::Dice,
        SimilarityMetric::Jaccard,
        SimilarityMetric::Overlap,
    ];

    /// Parse a metric from a string.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cosine" | "cos" => Ok(SimilarityMetric::Cosine),
            "dice" => Ok(SimilarityMetric::Dice),
            "jaccard" => Ok(SimilarityMetric::Jaccard),
            "overlap" => Ok(SimilarityMetric::Overlap),
            _ => Err(MailtabError::invalid_argument(format!(
                "Unknown similarity metric: {s}"
            ))),
        }
    }
}

impl Similarity for SimilarityMetric {
    fn score(&self, x: &SparseVector, y: &SparseVector) -> f64 {
        match self {
            SimilarityMetric::Cosine => cosine(x, y),
            SimilarityMetric::Dice => dice(x, y),
            SimilarityMetric::Jaccard => jaccard(x, y),
            SimilarityMetric::Overlap => overlap(x, y),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Dice => "dice",
            SimilarityMetric::Jaccard => "jaccard",
            SimilarityMetric::Overlap => "overlap",
        }
    }
}
