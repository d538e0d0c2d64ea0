//! Plain term frequency over body tokens.

use crate::document::{Document, SparseVector};
use crate::vectorize::Vectorizer;

/// Each body token adds 1.0 to its own key. Other fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyVectorizer;

impl TermFrequencyVectorizer {
    pub fn new() -> Self {
        TermFrequencyVectorizer
    }
}

impl Vectorizer for TermFrequencyVectorizer {
    fn vectorize(&self, doc: &Document) -> SparseVector {
        let mut vector = SparseVector::new();
        for word in &doc.body {
            *vector.entry(word.clone()).or_insert(0.0) += 1.0;
        }
        vector
    }

    fn name(&self) -> &'static str {
        "term_frequency"
    }
}
