//! Loading corpus files from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::corpus::parser::{Corpus, CorpusParser};
use crate::error::{MailtabError, Result};

/// Read and parse a single corpus file.
///
/// A missing file is reported as [`MailtabError::MissingResource`]; parse
/// errors are annotated with the file name.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Corpus> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MailtabError::missing(path));
    }

    let reader = BufReader::new(File::open(path)?);
    let corpus = CorpusParser::parse_reader(reader).map_err(|e| match e {
        MailtabError::Parse { line, message } => MailtabError::Parse {
            line,
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })?;

    info!(path = %path.display(), documents = corpus.len(), "loaded corpus");
    Ok(corpus)
}

/// Read several corpus files, failing on the first error.
pub fn read_corpora<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Corpus>> {
    paths.iter().map(read_corpus).collect()
}
