//! Scoring a labeled test set against trained profiles.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::CentroidClassifier;
use crate::document::Document;
use crate::evaluation::confusion::ConfusionMatrix;
use crate::label::Label;

/// A test document whose prediction disagreed with its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misclassification {
    pub id: usize,
    pub truth: Label,
    pub predicted: Label,
    /// Scores indexed by label code.
    pub scores: [f64; Label::COUNT],
}

/// Outcome of evaluating a test set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub matrix: ConfusionMatrix,
    pub misclassifications: Vec<Misclassification>,
    /// Test documents without a label, which cannot be scored.
    pub skipped: usize,
}

impl Evaluation {
    pub fn total(&self) -> usize {
        self.matrix.total()
    }

    pub fn correct(&self) -> usize {
        self.matrix.correct()
    }

    /// `None` for an empty test set.
    pub fn accuracy(&self) -> Option<f64> {
        self.matrix.accuracy()
    }

    pub fn report(&self) -> EvaluationReport {
        EvaluationReport {
            total: self.total(),
            correct: self.correct(),
            accuracy: self.accuracy(),
            skipped: self.skipped,
            confusion_matrix: self.matrix.rows().to_vec(),
            labels: Label::ALL.iter().map(|l| l.name().to_string()).collect(),
            misclassified: self
                .misclassifications
                .iter()
                .map(|m| m.id)
                .collect(),
        }
    }
}

/// Serializable summary of an [`Evaluation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub correct: usize,
    pub accuracy: Option<f64>,
    pub skipped: usize,
    /// Rows are true labels, columns are predictions.
    pub confusion_matrix: Vec<[usize; Label::COUNT]>,
    /// Label names by code.
    pub labels: Vec<String>,
    /// Ids of misclassified documents.
    pub misclassified: Vec<usize>,
}

/// Classify every labeled document and tally the results.
pub fn evaluate(classifier: &CentroidClassifier, docs: &[Document]) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for doc in docs {
        let Some(truth) = doc.label else {
            evaluation.skipped += 1;
            continue;
        };

        let prediction = classifier.predict(&doc.vector);
        evaluation.matrix.record(truth, prediction.label);
        if prediction.label != truth {
            debug!(
                id = doc.id,
                truth = truth.name(),
                predicted = prediction.label.name(),
                scores = ?prediction.scores,
                "misclassified"
            );
            evaluation.misclassifications.push(Misclassification {
                id: doc.id,
                truth,
                predicted: prediction.label,
                scores: prediction.scores,
            });
        }
    }

    if evaluation.skipped > 0 {
        warn!(skipped = evaluation.skipped, "skipped unlabeled test documents");
    }
    if evaluation.total() == 0 {
        warn!("test set is empty, accuracy is undefined");
    }

    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ProfileSet;
    use crate::document::SparseVector;

    fn vector(key: &str) -> SparseVector {
        [(key.to_string(), 1.0)].into_iter().collect()
    }

    fn classifier() -> CentroidClassifier {
        CentroidClassifier::new(ProfileSet::from_profiles(Label::ALL.map(|l| vector(l.name()))))
    }

    fn doc(id: usize, label: Option<Label>, key: &str) -> Document {
        let mut doc = Document::placeholder(id);
        doc.label = label;
        doc.vector = vector(key);
        doc
    }

    #[test]
    fn test_evaluate() {
        let docs = vec![
            doc(1, Some(Label::Forums), "forums"),
            doc(2, Some(Label::Social), "social"),
            doc(3, Some(Label::Updates), "promotions"),
            doc(4, None, "social"),
        ];

        let evaluation = evaluate(&classifier(), &docs);
        assert_eq!(evaluation.total(), 3);
        assert_eq!(evaluation.correct(), 2);
        assert_eq!(evaluation.skipped, 1);
        assert_eq!(evaluation.matrix.get(Label::Updates, Label::Promotions), 1);
        assert_eq!(evaluation.misclassifications.len(), 1);
        assert_eq!(evaluation.misclassifications[0].id, 3);
        assert_eq!(evaluation.misclassifications[0].scores[2], 1.0);

        let report = evaluation.report();
        assert_eq!(report.misclassified, vec![3]);
        assert_eq!(report.confusion_matrix.len(), Label::COUNT);
        assert!((report.accuracy.unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_test_set() {
        let evaluation = evaluate(&classifier(), &[]);
        assert_eq!(evaluation.total(), 0);
        assert_eq!(evaluation.accuracy(), None);
        assert_eq!(evaluation.report().accuracy, None);
    }
}
