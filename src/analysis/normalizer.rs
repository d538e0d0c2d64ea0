//! Body normalization passes.
//!
//! Both passes touch only `body`; every other field is carried over and the
//! feature vector is cleared so it has to be recomputed downstream.

use std::fmt;
use std::sync::Arc;

use crate::analysis::stem::Stemmer;
use crate::analysis::stop::StopWords;
use crate::document::Document;

/// Replace every body token with its stem.
pub fn stem_document(doc: &Document, stemmer: &dyn Stemmer) -> Document {
    doc.with_body(doc.body.iter().map(|word| stemmer.stem(word)).collect())
}

/// Drop every body token found in `stop_words`.
pub fn remove_stopwords(doc: &Document, stop_words: &StopWords) -> Document {
    doc.with_body(
        doc.body
            .iter()
            .filter(|word| !stop_words.contains(word))
            .cloned()
            .collect(),
    )
}

/// Applies the enabled passes in a fixed order: stop words first, then stems.
pub struct Normalizer {
    stop_words: Option<Arc<StopWords>>,
    stemmer: Option<Arc<dyn Stemmer>>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stop_words", &self.stop_words.as_ref().map(|s| s.len()))
            .field("stemmer", &self.stemmer.as_ref().map(|s| s.name()))
            .finish()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// A normalizer with both passes disabled.
    pub fn new() -> Self {
        Normalizer {
            stop_words: None,
            stemmer: None,
        }
    }

    /// Enable stop word removal.
    pub fn with_stop_words(mut self, stop_words: Arc<StopWords>) -> Self {
        self.stop_words = Some(stop_words);
        self
    }

    /// Enable stemming.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = Some(stemmer);
        self
    }

    /// Whether any pass is enabled.
    pub fn is_noop(&self) -> bool {
        self.stop_words.is_none() && self.stemmer.is_none()
    }

    pub fn normalize(&self, doc: &Document) -> Document {
        let mut doc = match &self.stop_words {
            Some(stop_words) => remove_stopwords(doc, stop_words),
            None => doc.clone(),
        };
        if let Some(stemmer) = &self.stemmer {
            doc = stem_document(&doc, stemmer.as_ref());
        }
        doc
    }

    pub fn normalize_all(&self, docs: &[Document]) -> Vec<Document> {
        docs.iter().map(|doc| self.normalize(doc)).collect()
    }
}
