//! Similarity-based label assignment.

use serde::{Deserialize, Serialize};

use crate::classify::profile::ProfileSet;
use crate::document::SparseVector;
use crate::label::Label;
use crate::similarity::{Similarity, SimilarityMetric};

/// First label, in ascending code order, whose score equals the maximum.
pub fn argmax(scores: &[f64; Label::COUNT]) -> Label {
    let mut best = Label::ALL[0];
    for label in Label::ALL.into_iter().skip(1) {
        if scores[label.code()] > scores[best.code()] {
            best = label;
        }
    }
    best
}

/// The chosen label and the score of every profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: Label,
    /// Scores indexed by label code.
    pub scores: [f64; Label::COUNT],
}

/// Nearest-centroid classifier over a fixed set of profiles.
#[derive(Debug, Clone)]
pub struct CentroidClassifier {
    profiles: ProfileSet,
    metric: SimilarityMetric,
}

impl CentroidClassifier {
    /// Create a classifier scoring with cosine similarity.
    pub fn new(profiles: ProfileSet) -> Self {
        CentroidClassifier {
            profiles,
            metric: SimilarityMetric::Cosine,
        }
    }

    /// Score with a different similarity measure.
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// Similarity of `vector` to each profile, indexed by label code.
    pub fn scores(&self, vector: &SparseVector) -> [f64; Label::COUNT] {
        Label::ALL.map(|label| self.metric.score(vector, self.profiles.get(label)))
    }

    pub fn predict(&self, vector: &SparseVector) -> Prediction {
        let scores = self.scores(vector);
        Prediction {
            label: argmax(&scores),
            scores,
        }
    }

    pub fn classify(&self, vector: &SparseVector) -> Label {
        self.predict(vector).label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> SparseVector {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_argmax_prefers_lowest_label_on_ties() {
        assert_eq!(argmax(&[0.0; Label::COUNT]), Label::Forums);
        assert_eq!(argmax(&[0.1, 0.5, 0.2, 0.5, 0.5]), Label::Personal);
        assert_eq!(argmax(&[0.1, 0.2, 0.3, 0.4, 0.9]), Label::Updates);
    }

    #[test]
    fn test_tied_profiles_resolve_to_lower_label() {
        let shared = vector(&[("deal", 1.0)]);
        let profiles = ProfileSet::from_profiles([
            vector(&[("thread", 1.0)]),
            vector(&[("lunch", 1.0)]),
            shared.clone(),
            vector(&[("friend", 1.0)]),
            shared,
        ]);
        let classifier = CentroidClassifier::new(profiles);

        let query = vector(&[("deal", 2.0)]);
        let prediction = classifier.predict(&query);
        assert_eq!(prediction.scores[2], prediction.scores[4]);
        assert_eq!(prediction.label, Label::Promotions);
    }

    #[test]
    fn test_classify_picks_most_similar_profile() {
        let profiles = ProfileSet::from_profiles([
            vector(&[("thread", 1.0)]),
            vector(&[("lunch", 1.0)]),
            vector(&[("http", 10.0)]),
            vector(&[("friend", 1.0)]),
            vector(&[("receipt", 1.0)]),
        ]);
        let classifier = CentroidClassifier::new(profiles).with_metric(SimilarityMetric::Dice);

        assert_eq!(classifier.metric(), SimilarityMetric::Dice);
        assert_eq!(
            classifier.classify(&vector(&[("receipt", 1.0), ("lunch", 0.5)])),
            Label::Updates
        );
    }
}
