//! Text normalization for document bodies.
//!
//! Provides the [`Stemmer`] abstraction with Porter and identity
//! implementations, stop word sets, and the [`Normalizer`] that applies
//! stop word removal and stemming to a document's body tokens.

pub mod normalizer;
pub mod stem;
pub mod stop;

// Re-export commonly used types
pub use normalizer::*;
pub use stem::*;
pub use stop::*;
