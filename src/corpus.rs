// WHY: In-memory transcript collection shared read-only by every shard worker
// Lines are classified on demand by prefix so loading stays a plain line read

use regex_automata::meta::Regex;
use std::sync::OnceLock;

/// Prefix marking a chapter boundary line
pub const CHAPTER_PREFIX: &str = "<CHAPTER";
/// Prefix marking a speaker turn line
pub const SPEAKER_PREFIX: &str = "<SPEAKER";

/// A single transcript file as an ordered list of raw lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<String>> for Document {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

/// Attribute values found on a speaker marker; absent attributes stay empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerTag {
    pub id: String,
    pub name: String,
    pub language: String,
}

/// Structural role of a transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    ChapterBoundary,
    SpeakerTurn(SpeakerTag),
}

struct TagPatterns {
    id: Regex,
    name: Regex,
    language: Regex,
}

// WHY: compiled once per process; the resolver classifies lines from many threads
fn tag_patterns() -> &'static TagPatterns {
    static PATTERNS: OnceLock<TagPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| TagPatterns {
        id: Regex::new(r"ID=([0-9]+)").expect("static ID pattern"),
        name: Regex::new(r#"NAME="([^"]+)""#).expect("static NAME pattern"),
        language: Regex::new(r#"LANGUAGE="([A-Z]+)""#).expect("static LANGUAGE pattern"),
    })
}

/// Return the first capture group of `pattern` in `line`, or an empty string
fn first_group(pattern: &Regex, line: &str) -> String {
    let mut caps = pattern.create_captures();
    pattern.captures(line, &mut caps);
    caps.get_group(1)
        .map(|span| line[span.range()].to_string())
        .unwrap_or_default()
}

/// Extract the id, name and language attributes of a speaker marker line
pub fn parse_speaker_tag(line: &str) -> SpeakerTag {
    let patterns = tag_patterns();
    SpeakerTag {
        id: first_group(&patterns.id, line),
        name: first_group(&patterns.name, line),
        language: first_group(&patterns.language, line),
    }
}

/// Classify a raw line by its prefix
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(CHAPTER_PREFIX) {
        LineKind::ChapterBoundary
    } else if line.starts_with(SPEAKER_PREFIX) {
        LineKind::SpeakerTurn(parse_speaker_tag(line))
    } else {
        LineKind::Plain
    }
}

/// Ordered collection of transcript documents, immutable for a run
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Build a corpus directly from line vectors, one per document
    pub fn from_lines<I, D, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let documents = documents
            .into_iter()
            .map(|doc| Document::new(doc.into_iter().map(Into::into).collect()))
            .collect();
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of lines in document `doc`; zero for an unknown index
    pub fn line_count(&self, doc: usize) -> usize {
        self.documents.get(doc).map_or(0, Document::len)
    }

    pub fn line_text(&self, doc: usize, idx: usize) -> Option<&str> {
        self.documents
            .get(doc)
            .and_then(|d| d.lines.get(idx))
            .map(String::as_str)
    }

    pub fn classify(&self, doc: usize, idx: usize) -> Option<LineKind> {
        self.line_text(doc, idx).map(classify_line)
    }

    /// Total number of lines over all documents
    pub fn total_lines(&self) -> usize {
        self.documents.iter().map(Document::len).sum()
    }
}
