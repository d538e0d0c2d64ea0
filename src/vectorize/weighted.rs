//! Hand-weighted feature extraction.
//!
//! All features share a single key space, so a subject token `"a"` and the
//! sender character `a` accumulate into the same dimension.

use serde::{Deserialize, Serialize};

use crate::document::{Document, SparseVector};
use crate::vectorize::Vectorizer;

/// Default bucket substrings, in precedence order.
pub const DEFAULT_BUCKETS: [&str; 5] = ["http", "linkedin", "subscribe", "track", "mailto"];

/// Weights used by [`WeightedVectorizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    /// Substrings that fold a body token into a bucket named after the
    /// substring. The first match wins.
    pub buckets: Vec<String>,
    /// Weight a bucketed body token adds to its bucket.
    pub bucket_weight: f64,
    /// Weight any other body token adds to itself.
    pub body_weight: f64,
    /// Weight each character of the sender adds to itself.
    pub sender_char_weight: f64,
    /// Weight each subject token adds to itself.
    pub subject_weight: f64,
    /// Weight each character of the hour adds to itself.
    pub hour_char_weight: f64,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        WeightingConfig {
            buckets: DEFAULT_BUCKETS.iter().map(|s| s.to_string()).collect(),
            bucket_weight: 10.0,
            body_weight: 1.0,
            sender_char_weight: 1.0,
            subject_weight: 10.0,
            hour_char_weight: 20.0,
        }
    }
}

/// Vectorizer combining bucketed body tokens with sender, subject and hour
/// features.
///
/// Sender and hour are treated as bags of characters rather than tokens.
#[derive(Debug, Clone, Default)]
pub struct WeightedVectorizer {
    config: WeightingConfig,
}

impl WeightedVectorizer {
    pub fn new(config: WeightingConfig) -> Self {
        WeightedVectorizer { config }
    }

    pub fn config(&self) -> &WeightingConfig {
        &self.config
    }

    /// The key a body token contributes to, with its weight.
    fn body_feature<'a>(&'a self, word: &'a str) -> (&'a str, f64) {
        match self
            .config
            .buckets
            .iter()
            .find(|bucket| word.contains(bucket.as_str()))
        {
            Some(bucket) => (bucket.as_str(), self.config.bucket_weight),
            None => (word, self.config.body_weight),
        }
    }
}

fn add(vector: &mut SparseVector, key: &str, weight: f64) {
    match vector.get_mut(key) {
        Some(value) => *value += weight,
        None => {
            vector.insert(key.to_string(), weight);
        }
    }
}

impl Vectorizer for WeightedVectorizer {
    fn vectorize(&self, doc: &Document) -> SparseVector {
        let mut vector = SparseVector::new();
        let mut buf = [0u8; 4];

        for word in &doc.body {
            let (key, weight) = self.body_feature(word);
            add(&mut vector, key, weight);
        }
        for c in doc.sender.chars() {
            add(&mut vector, c.encode_utf8(&mut buf), self.config.sender_char_weight);
        }
        for word in &doc.subject {
            add(&mut vector, word, self.config.subject_weight);
        }
        for c in doc.hour.chars() {
            add(&mut vector, c.encode_utf8(&mut buf), self.config.hour_char_weight);
        }

        vector
    }

    fn name(&self) -> &'static str {
        "weighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bucket_precedence() {
        let mut doc = Document::placeholder(1);
        // "http" outranks "track" and "linkedin" outranks "subscribe".
        doc.body = words(&[
            "https://t.example/track",
            "linkedin-unsubscribe",
            "unsubscribe",
            "tracking",
            "mailto:me",
            "hello",
            "hello",
        ]);

        let vector = WeightedVectorizer::default().vectorize(&doc);
        assert_eq!(vector["http"], 10.0);
        assert_eq!(vector["linkedin"], 10.0);
        assert_eq!(vector["subscribe"], 10.0);
        assert_eq!(vector["track"], 10.0);
        assert_eq!(vector["mailto"], 10.0);
        assert_eq!(vector["hello"], 2.0);
        assert_eq!(vector.len(), 6);
    }

    #[test]
    fn test_sender_subject_and_hour_features() {
        let mut doc = Document::placeholder(1);
        doc.sender = "aab".to_string();
        doc.subject = words(&["sale", "b"]);
        doc.hour = "09".to_string();

        let vector = WeightedVectorizer::default().vectorize(&doc);
        assert_eq!(vector["a"], 2.0);
        // one sender character plus one subject token
        assert_eq!(vector["b"], 11.0);
        assert_eq!(vector["sale"], 10.0);
        assert_eq!(vector["0"], 20.0);
        assert_eq!(vector["9"], 20.0);
        assert_eq!(vector.len(), 5);
    }

    #[test]
    fn test_repeated_hour_digit() {
        let mut doc = Document::placeholder(1);
        doc.hour = "11".to_string();

        let vector = WeightedVectorizer::default().vectorize(&doc);
        assert_eq!(vector["1"], 40.0);
    }

    #[test]
    fn test_custom_weights() {
        let config = WeightingConfig {
            buckets: words(&["promo"]),
            bucket_weight: 3.0,
            ..Default::default()
        };
        let mut doc = Document::placeholder(1);
        doc.body = words(&["promocode", "http://x"]);

        let vector = WeightedVectorizer::new(config).vectorize(&doc);
        assert_eq!(vector["promo"], 3.0);
        assert_eq!(vector["http://x"], 1.0);
    }
}
