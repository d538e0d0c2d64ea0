//! # Mailtab
//!
//! Sorts email into the five inbox categories (forums, personal, promotions,
//! social, updates) by nearest-centroid classification over hand-weighted
//! bag-of-words vectors.
//!
//! ## Pipeline
//!
//! - [`corpus`]: parse the line-oriented corpus markup into documents
//! - [`analysis`]: optional stop word removal and stemming of body tokens
//! - [`vectorize`]: map documents to sparse weighted term vectors
//! - [`classify`]: average training vectors into per-label profiles and pick
//!   the most similar profile for a query
//! - [`evaluation`]: confusion matrix and accuracy over a test set
//! - [`experiment`]: configuration and the end-to-end run

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod corpus;
pub mod document;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod label;
pub mod similarity;
pub mod vectorize;

pub mod prelude {
    pub use crate::classify::{CentroidClassifier, ProfileSet};
    pub use crate::corpus::{Corpus, CorpusParser};
    pub use crate::document::{Document, SparseVector};
    pub use crate::error::{MailtabError, Result};
    pub use crate::experiment::{Experiment, ExperimentConfig};
    pub use crate::label::Label;
    pub use crate::similarity::{Similarity, SimilarityMetric};
    pub use crate::vectorize::{Vectorizer, VectorizerKind};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
