//! Nearest-centroid classification.
//!
//! [`ProfileSet`] averages the training vectors of each label into a profile;
//! [`CentroidClassifier`] assigns a query vector the label of its most
//! similar profile.

pub mod classifier;
pub mod profile;

pub use classifier::{CentroidClassifier, Prediction, argmax};
pub use profile::ProfileSet;
