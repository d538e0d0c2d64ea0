//! Test-set evaluation: confusion matrix, accuracy and misclassifications.

pub mod confusion;
pub mod evaluator;

pub use confusion::ConfusionMatrix;
pub use evaluator::{Evaluation, EvaluationReport, Misclassification, evaluate};
