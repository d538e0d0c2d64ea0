//! Document vectorization.
//!
//! A [`Vectorizer`] maps a document to a [`SparseVector`]. Two strategies are
//! provided: plain body term frequency and the weighted scheme used for
//! classification, which folds tracking links and subscription boilerplate
//! into heavy buckets and adds sender, subject and hour features.

pub mod term_frequency;
pub mod weighted;

pub use term_frequency::TermFrequencyVectorizer;
pub use weighted::{WeightedVectorizer, WeightingConfig};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::{Document, SparseVector};
use crate::error::{MailtabError, Result};

/// Trait for document vectorizers.
pub trait Vectorizer: Send + Sync {
    /// Compute the feature vector of a document.
    fn vectorize(&self, doc: &Document) -> SparseVector;

    /// Get the name of this vectorizer.
    fn name(&self) -> &'static str;
}

/// Selectable vectorization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VectorizerKind {
    /// Raw body token counts
    TermFrequency,
    /// Bucketed body tokens plus sender, subject and hour features
    #[default]
    Weighted,
}

impl VectorizerKind {
    /// Instantiate the vectorizer. `weighting` only affects [`VectorizerKind::Weighted`].
    pub fn build(self, weighting: &WeightingConfig) -> Box<dyn Vectorizer> {
        match self {
            VectorizerKind::TermFrequency => Box::new(TermFrequencyVectorizer::new()),
            VectorizerKind::Weighted => Box::new(WeightedVectorizer::new(weighting.clone())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VectorizerKind::TermFrequency => "term_frequency",
            VectorizerKind::Weighted => "weighted",
        }
    }

    /// Parse a vectorizer kind from a string.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "term_frequency" | "tf" => Ok(VectorizerKind::TermFrequency),
            "weighted" | "custom" => Ok(VectorizerKind::Weighted),
            _ => Err(MailtabError::invalid_argument(format!(
                "Unknown vectorizer: {s}"
            ))),
        }
    }
}

/// Attach a feature vector to every document, preserving order.
///
/// Documents are independent, so the parallel path yields the same vectors
/// as the sequential one.
pub fn vectorize_all(
    vectorizer: &dyn Vectorizer,
    docs: Vec<Document>,
    parallel: bool,
) -> Vec<Document> {
    if parallel {
        docs.into_par_iter()
            .map(|doc| {
                let vector = vectorizer.vectorize(&doc);
                doc.with_vector(vector)
            })
            .collect()
    } else {
        docs.into_iter()
            .map(|doc| {
                let vector = vectorizer.vectorize(&doc);
                doc.with_vector(vector)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Document> {
        (1..=40)
            .map(|i| {
                let mut doc = Document::placeholder(i);
                doc.body = vec![format!("word{}", i % 7), "http://x".to_string()];
                doc.hour = format!("{:02}", i % 24);
                doc
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let vectorizer = WeightedVectorizer::default();
        let sequential = vectorize_all(&vectorizer, docs(), false);
        let parallel = vectorize_all(&vectorizer, docs(), true);
        assert_eq!(sequential, parallel);
        for (i, doc) in sequential.iter().enumerate() {
            assert_eq!(doc.id, i + 1);
            assert!(!doc.vector.is_empty());
        }
    }

    #[test]
    fn test_kind_parse_and_build() {
        assert_eq!(VectorizerKind::parse_str("tf").unwrap(), VectorizerKind::TermFrequency);
        assert_eq!(VectorizerKind::parse_str("weighted").unwrap(), VectorizerKind::Weighted);
        assert!(VectorizerKind::parse_str("tfidf").is_err());

        let weighting = WeightingConfig::default();
        assert_eq!(VectorizerKind::TermFrequency.build(&weighting).name(), "term_frequency");
        assert_eq!(VectorizerKind::Weighted.build(&weighting).name(), "weighted");
    }
}
