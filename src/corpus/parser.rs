//! Corpus markup parser.

use std::io::BufRead;

use bit_vec::BitVec;
use tracing::{debug, warn};

use crate::document::Document;
use crate::error::{MailtabError, Result};
use crate::label::Label;

const INDEX_MARKER: &str = ".I";
const LABEL_MARKER: &str = ".L";
const SENDER_MARKER: &str = ".F";
const SUBJECT_MARKER: &str = ".S";
const DATE_MARKER: &str = ".D";
const METADATA_END: &str = ".M";

/// Field of a `.D` line (0-based, whitespace separated) holding `HH:MM:SS`.
const DATE_TIME_FIELD: usize = 4;

/// Largest document id accepted by default.
pub const DEFAULT_MAX_DOCUMENT_ID: usize = 1_000_000;

/// Substrings that mark a token as noise.
pub const NONSENSE_MARKERS: [&str; 5] = ["==", "--", "..", "__", "@"];

/// Whether `token` contains any of the [`NONSENSE_MARKERS`].
pub fn is_nonsense(token: &str) -> bool {
    NONSENSE_MARKERS.iter().any(|marker| token.contains(marker))
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .filter(|word| !is_nonsense(word))
        .map(str::to_lowercase)
}

/// Text after a two-character marker and its separator.
fn marker_value(line: &str) -> &str {
    let mut rest = line[2..].chars();
    rest.next();
    rest.as_str()
}

/// Documents of one corpus file, addressable by id.
///
/// Slot `i` holds the document whose `.I` line named `i`. Slot 0 is a
/// reserved placeholder, as is any id skipped by the file.
#[derive(Debug, Clone)]
pub struct Corpus {
    slots: Vec<Document>,
    /// Slots that were filled in by a `.D` line.
    emitted: BitVec,
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl Corpus {
    /// Create an empty corpus holding only the reserved slot 0.
    pub fn new() -> Self {
        Corpus {
            slots: vec![Document::placeholder(0)],
            emitted: BitVec::from_elem(1, false),
        }
    }

    /// Build a corpus from already-parsed documents, each placed at its id.
    pub fn from_documents<I: IntoIterator<Item = Document>>(documents: I) -> Self {
        let mut corpus = Corpus::new();
        for doc in documents {
            let id = doc.id;
            corpus.ensure_slot(id);
            corpus.slots[id] = doc;
            corpus.emitted.set(id, true);
        }
        corpus
    }

    fn ensure_slot(&mut self, id: usize) {
        while self.slots.len() <= id {
            let next = self.slots.len();
            self.slots.push(Document::placeholder(next));
            self.emitted.push(false);
        }
    }

    /// The emitted document with this id.
    pub fn get(&self, id: usize) -> Option<&Document> {
        if self.emitted.get(id).unwrap_or(false) {
            self.slots.get(id)
        } else {
            None
        }
    }

    /// Every slot, placeholders included. `slots()[i].id == i`.
    pub fn slots(&self) -> &[Document] {
        &self.slots
    }

    /// Emitted documents in id order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.slots
            .iter()
            .zip(self.emitted.iter())
            .filter(|(_, emitted)| *emitted)
            .map(|(doc, _)| doc)
    }

    /// Consume the corpus, keeping only emitted documents.
    pub fn into_documents(self) -> Vec<Document> {
        self.slots
            .into_iter()
            .zip(self.emitted.iter())
            .filter(|(_, emitted)| *emitted)
            .map(|(doc, _)| doc)
            .collect()
    }

    /// Number of emitted documents.
    pub fn len(&self) -> usize {
        self.emitted.iter().filter(|emitted| *emitted).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Incremental parser for the corpus markup.
///
/// Feed lines with [`CorpusParser::feed_line`] and collect the result with
/// [`CorpusParser::finish`], or use one of the `parse_*` helpers.
///
/// The label belongs to one record and is cleared by every `.I` line. The
/// sender carries over to later records until the next `.F` line.
#[derive(Debug)]
pub struct CorpusParser {
    corpus: Corpus,
    current: usize,
    label: Option<Label>,
    sender: String,
    subject: Vec<String>,
    line_number: usize,
    max_id: usize,
}

impl Default for CorpusParser {
    fn default() -> Self {
        CorpusParser {
            corpus: Corpus::new(),
            current: 0,
            label: None,
            sender: String::new(),
            subject: Vec::new(),
            line_number: 0,
            max_id: DEFAULT_MAX_DOCUMENT_ID,
        }
    }
}

impl CorpusParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `.I` lines naming an id above `max_id`.
    pub fn with_max_id(mut self, max_id: usize) -> Self {
        self.max_id = max_id;
        self
    }

    /// Parse a whole corpus held in memory.
    pub fn parse_str(text: &str) -> Result<Corpus> {
        let mut parser = CorpusParser::new();
        for line in text.lines() {
            parser.feed_line(line)?;
        }
        Ok(parser.finish())
    }

    /// Parse a corpus from a buffered reader.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Corpus> {
        let mut parser = CorpusParser::new();
        for line in reader.lines() {
            parser.feed_line(&line?)?;
        }
        Ok(parser.finish())
    }

    /// Consume one line of markup.
    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        let line = line.trim();

        if line.starts_with(INDEX_MARKER) {
            let id = self.parse_number(line, "document index")?;
            if id > self.max_id {
                return Err(MailtabError::parse(
                    self.line_number,
                    format!("document index {id} exceeds the limit of {}", self.max_id),
                ));
            }
            self.current = id;
            self.label = None;
            self.corpus.ensure_slot(id);
        } else if line.starts_with(LABEL_MARKER) {
            let code = self.parse_number(line, "label")?;
            let label = Label::from_code(code).ok_or_else(|| {
                MailtabError::parse(self.line_number, format!("unknown label code {code}"))
            })?;
            self.label = Some(label);
        } else if line.starts_with(SENDER_MARKER) {
            self.sender = Self::parse_sender(marker_value(line));
        } else if line.starts_with(SUBJECT_MARKER) {
            self.subject.extend(tokens(marker_value(line)));
        } else if line.starts_with(DATE_MARKER) {
            let hour = self.parse_hour(marker_value(line))?;
            self.emit(hour);
        } else if line != METADATA_END {
            let id = self.current;
            self.corpus.ensure_slot(id);
            self.corpus.slots[id].body.extend(tokens(line));
        }

        Ok(())
    }

    /// Finish parsing and return the corpus.
    pub fn finish(self) -> Corpus {
        debug!(
            lines = self.line_number,
            documents = self.corpus.len(),
            "parsed corpus"
        );
        self.corpus
    }

    fn parse_number(&self, line: &str, what: &str) -> Result<usize> {
        let value = marker_value(line).trim();
        value.parse::<usize>().map_err(|_| {
            MailtabError::parse(
                self.line_number,
                format!("expected a non-negative integer {what}, found {value:?}"),
            )
        })
    }

    fn parse_sender(value: &str) -> String {
        if value.contains('<') && value.contains('>') {
            value
                .split('<')
                .nth(1)
                .and_then(|rest| rest.split('>').next())
                .unwrap_or_default()
                .to_string()
        } else {
            value.to_string()
        }
    }

    fn parse_hour(&self, value: &str) -> Result<String> {
        let field = value.split_whitespace().nth(DATE_TIME_FIELD).ok_or_else(|| {
            MailtabError::parse(
                self.line_number,
                format!(
                    "date line needs at least {} fields, found {:?}",
                    DATE_TIME_FIELD + 1,
                    value
                ),
            )
        })?;
        Ok(field.chars().take(2).collect())
    }

    fn emit(&mut self, hour: String) {
        let id = self.current;
        self.corpus.ensure_slot(id);
        if self.corpus.emitted[id] {
            warn!(id, line = self.line_number, "document emitted twice, keeping the later record");
        }

        let body = std::mem::take(&mut self.corpus.slots[id].body);
        self.corpus.slots[id] = Document {
            id,
            label: self.label,
            sender: self.sender.clone(),
            subject: std::mem::take(&mut self.subject),
            hour,
            body,
            vector: Default::default(),
        };
        self.corpus.emitted.set(id, true);
    }
}
