//! Parsed email documents and their sparse feature vectors.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Sparse term vector: feature key to weight. Absent keys weigh 0.
///
/// Ordered so that summations over a vector always visit keys in the same
/// sequence, which keeps similarity scores (and therefore ties) reproducible.
pub type SparseVector = BTreeMap<String, f64>;

/// A single email as read from a corpus file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier from the `.I` line; equals the document's slot in its corpus.
    pub id: usize,
    /// Category from the `.L` line, `None` for unlabeled documents.
    pub label: Option<Label>,
    /// Address portion of the `.F` line.
    pub sender: String,
    /// Lower-cased subject tokens.
    pub subject: Vec<String>,
    /// Two-character hour of day taken from the `.D` line.
    pub hour: String,
    /// Lower-cased body tokens.
    pub body: Vec<String>,
    /// Feature vector, empty until vectorized.
    pub vector: SparseVector,
}

impl Document {
    /// Create an empty placeholder occupying slot `id`.
    pub fn placeholder(id: usize) -> Self {
        Document {
            id,
            ..Default::default()
        }
    }

    /// Copy of this document with `body` replaced and the vector cleared.
    pub fn with_body(&self, body: Vec<String>) -> Self {
        Document {
            id: self.id,
            label: self.label,
            sender: self.sender.clone(),
            subject: self.subject.clone(),
            hour: self.hour.clone(),
            body,
            vector: SparseVector::new(),
        }
    }

    /// Consume this document and attach a feature vector.
    pub fn with_vector(mut self, vector: SparseVector) -> Self {
        self.vector = vector;
        self
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label.map(Label::name).unwrap_or("unlabeled");
        writeln!(f, "doc_id: {}", self.id)?;
        writeln!(f, "  label: {label}")?;
        writeln!(f, "  sender: {}", self.sender)?;
        writeln!(f, "  subject: {:?}", self.subject)?;
        writeln!(f, "  hour: {}", self.hour)?;
        writeln!(f, "  text: {:?}", self.body)?;
        writeln!(f, "  vector: {:?}", self.vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_body_clears_vector() {
        let mut vector = SparseVector::new();
        vector.insert("hello".to_string(), 1.0);
        let doc = Document {
            id: 4,
            label: Some(Label::Social),
            sender: "a@b.com".to_string(),
            subject: vec!["hi".to_string()],
            hour: "09".to_string(),
            body: vec!["hello".to_string()],
            vector,
        };

        let replaced = doc.with_body(vec!["bye".to_string()]);
        assert_eq!(replaced.id, 4);
        assert_eq!(replaced.label, Some(Label::Social));
        assert_eq!(replaced.sender, "a@b.com");
        assert_eq!(replaced.subject, vec!["hi"]);
        assert_eq!(replaced.hour, "09");
        assert_eq!(replaced.body, vec!["bye"]);
        assert!(replaced.vector.is_empty());
    }

    #[test]
    fn test_display() {
        let doc = Document::placeholder(0);
        let rendered = doc.to_string();
        assert!(rendered.starts_with("doc_id: 0\n"));
        assert!(rendered.contains("label: unlabeled"));
    }
}
