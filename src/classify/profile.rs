//! Per-label centroid profiles.

use tracing::{debug, warn};

use crate::document::{Document, SparseVector};
use crate::error::{MailtabError, Result};
use crate::label::Label;

/// One mean feature vector per label, indexed by label code.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSet {
    profiles: [SparseVector; Label::COUNT],
    counts: [usize; Label::COUNT],
}

impl ProfileSet {
    /// Average the vectors of labeled training documents per label.
    ///
    /// Unlabeled documents are skipped. Every label must have at least one
    /// training document.
    pub fn build(docs: &[Document]) -> Result<Self> {
        let mut profiles: [SparseVector; Label::COUNT] = Default::default();
        let mut counts = [0usize; Label::COUNT];
        let mut unlabeled = 0usize;

        for doc in docs {
            let Some(label) = doc.label else {
                unlabeled += 1;
                continue;
            };
            let profile = &mut profiles[label.code()];
            counts[label.code()] += 1;
            for (key, value) in &doc.vector {
                match profile.get_mut(key) {
                    Some(sum) => *sum += value,
                    None => {
                        profile.insert(key.clone(), *value);
                    }
                }
            }
        }

        if unlabeled > 0 {
            warn!(unlabeled, "skipped unlabeled training documents");
        }

        for label in Label::ALL {
            let count = counts[label.code()];
            if count == 0 {
                return Err(MailtabError::configuration(format!(
                    "label {label} has no training documents"
                )));
            }
            let n = count as f64;
            for value in profiles[label.code()].values_mut() {
                *value /= n;
            }
            debug!(
                label = label.name(),
                documents = count,
                features = profiles[label.code()].len(),
                "built profile"
            );
        }

        Ok(ProfileSet { profiles, counts })
    }

    /// Use precomputed profiles directly. Document counts are recorded as 0.
    pub fn from_profiles(profiles: [SparseVector; Label::COUNT]) -> Self {
        ProfileSet {
            profiles,
            counts: [0; Label::COUNT],
        }
    }

    pub fn get(&self, label: Label) -> &SparseVector {
        &self.profiles[label.code()]
    }

    /// Number of training documents averaged into the label's profile.
    pub fn document_count(&self, label: Label) -> usize {
        self.counts[label.code()]
    }

    /// Profiles paired with their labels, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &SparseVector)> {
        Label::ALL.into_iter().zip(self.profiles.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: usize, label: Option<Label>, pairs: &[(&str, f64)]) -> Document {
        let mut doc = Document::placeholder(id);
        doc.label = label;
        doc.vector = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        doc
    }

    fn one_per_label() -> Vec<Document> {
        Label::ALL
            .iter()
            .enumerate()
            .map(|(i, label)| doc(i + 1, Some(*label), &[(label.name(), 1.0)]))
            .collect()
    }

    #[test]
    fn test_profile_is_mean() {
        let mut docs = one_per_label();
        docs.push(doc(10, Some(Label::Forums), &[("forums", 3.0), ("extra", 4.0)]));
        docs.push(doc(11, Some(Label::Forums), &[("forums", 2.0)]));

        let profiles = ProfileSet::build(&docs).unwrap();
        let forums = profiles.get(Label::Forums);
        assert_eq!(profiles.document_count(Label::Forums), 3);
        assert_eq!(forums["forums"], 2.0);
        assert!((forums["extra"] - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(profiles.get(Label::Social)["social"], 1.0);
    }

    #[test]
    fn test_unlabeled_documents_are_skipped() {
        let mut docs = one_per_label();
        docs.push(doc(20, None, &[("noise", 100.0)]));

        let profiles = ProfileSet::build(&docs).unwrap();
        for (_, profile) in profiles.iter() {
            assert!(!profile.contains_key("noise"));
        }
    }

    #[test]
    fn test_missing_label_is_configuration_error() {
        let docs: Vec<Document> = one_per_label()
            .into_iter()
            .filter(|d| d.label != Some(Label::Personal))
            .collect();

        let err = ProfileSet::build(&docs).unwrap_err();
        assert!(matches!(err, MailtabError::Configuration(_)));
        assert!(err.to_string().contains("personal"));
    }
}
