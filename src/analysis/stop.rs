//! Stop word sets.
//!
//! Stop words are loaded once per run from a line-per-word file and are
//! read-only afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::{MailtabError, Result};

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A set of words removed from document bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English list.
    pub fn english() -> Self {
        StopWords {
            words: DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
        }
    }

    /// Build a set from arbitrary words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a line-per-word file. Lines are trimmed; blank lines are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MailtabError::missing(path));
        }

        let content = fs::read_to_string(path)?;
        let stop_words = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        debug!(path = %path.display(), words = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_english_defaults() {
        let stop_words = StopWords::english();
        assert!(stop_words.contains("the"));
        assert!(!stop_words.contains("unsubscribe"));
        assert_eq!(stop_words.len(), DEFAULT_ENGLISH_STOP_WORDS.len());
    }

    #[test]
    fn test_from_file_trims_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  the \nand\n\n\tof\n").unwrap();

        let stop_words = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stop_words, StopWords::from_words(["the", "and", "of"]));
    }

    #[test]
    fn test_missing_file() {
        let err = StopWords::from_file("/nonexistent/common_words").unwrap_err();
        assert!(matches!(err, MailtabError::MissingResource(_)));
    }
}
