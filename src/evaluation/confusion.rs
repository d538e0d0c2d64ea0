//! Confusion matrix.

use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Counts indexed `[true label][predicted label]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: [[usize; Label::COUNT]; Label::COUNT],
}

impl ConfusionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from `(truth, predicted)` pairs.
    pub fn from_pairs<I: IntoIterator<Item = (Label, Label)>>(pairs: I) -> Self {
        let mut matrix = Self::new();
        for (truth, predicted) in pairs {
            matrix.record(truth, predicted);
        }
        matrix
    }

    pub fn record(&mut self, truth: Label, predicted: Label) {
        self.counts[truth.code()][predicted.code()] += 1;
    }

    pub fn get(&self, truth: Label, predicted: Label) -> usize {
        self.counts[truth.code()][predicted.code()]
    }

    /// Rows in label order; columns are predictions.
    pub fn rows(&self) -> &[[usize; Label::COUNT]; Label::COUNT] {
        &self.counts
    }

    /// Number of recorded predictions.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Sum of the diagonal.
    pub fn correct(&self) -> usize {
        (0..Label::COUNT).map(|i| self.counts[i][i]).sum()
    }

    /// `correct / total`, or `None` when nothing was recorded.
    pub fn accuracy(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.correct() as f64 / total as f64),
        }
    }
}
