//! Corpus files: line-oriented email markup.
//!
//! A corpus is a stream of records, each introduced by an `.I` line:
//!
//! ```text
//! .I 1
//! .L 0
//! .F Jane Doe <jane@example.com>
//! .S Weekly digest
//! .D Mon, 2 Jan 2006 15:04:05 -0700
//! .M
//! body text ...
//! ```
//!
//! The `.D` line emits the record; body lines that follow it are appended to
//! the record named by the most recent `.I` line.

pub mod parser;
pub mod reader;

pub use parser::{Corpus, CorpusParser, DEFAULT_MAX_DOCUMENT_ID, NONSENSE_MARKERS, is_nonsense};
pub use reader::{read_corpora, read_corpus};
