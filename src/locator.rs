// WHY: Forward substring search from a remembered position in the corpus
// Aligned sentences mostly appear in corpus order, so the common case is a short scan

use crate::corpus::Corpus;

/// Characters stripped from both ends of a sentence before it is searched.
/// Includes the no-break space U+00A0 and the en and em dashes.
pub const TRIM_CHARS: &[char] = &[
    ' ', '\u{00A0}', '.', ',', ':', ';', '-', '\u{2013}', '\u{2014}', '(', ')',
];

/// A location in the corpus: document index and line index within it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub document: usize,
    pub line: usize,
}

impl Position {
    pub const START: Position = Position { document: 0, line: 0 };

    pub fn new(document: usize, line: usize) -> Self {
        Self { document, line }
    }
}

/// Strip surrounding whitespace and the fixed punctuation set from a sentence
pub fn trim_sentence(sentence: &str) -> &str {
    sentence.trim_matches(|c: char| c.is_whitespace() || TRIM_CHARS.contains(&c))
}

/// Find the first line at or after `from` containing `target`.
///
/// Only the starting document begins at `from.line`; every later document is
/// scanned from its first line. Matching is a case-sensitive substring test on
/// the raw line text.
pub fn locate(target: &str, corpus: &Corpus, from: Position) -> Option<Position> {
    corpus
        .documents()
        .iter()
        .enumerate()
        .skip(from.document)
        .find_map(|(doc_idx, doc)| {
            let first_line = if doc_idx == from.document { from.line } else { 0 };
            doc.lines()
                .iter()
                .enumerate()
                .skip(first_line)
                .find(|(_, text)| text.contains(target))
                .map(|(line_idx, _)| Position::new(doc_idx, line_idx))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_lines(vec![
            vec!["alpha beta", "gamma delta", "epsilon"],
            vec!["zeta", "alpha again", "eta theta"],
        ])
    }

    #[test]
    fn test_trim_sentence() {
        assert_eq!(trim_sentence("  Hello, world.  "), "Hello, world");
        assert_eq!(trim_sentence("\u{00A0}(Applause.)"), "Applause");
        assert_eq!(trim_sentence("\u{2013} Thank you \u{2014}"), "Thank you");
        assert_eq!(trim_sentence("... ;:"), "");
        assert_eq!(trim_sentence("Mr. Smith"), "Mr. Smith");
    }

    #[test]
    fn test_locate_from_start() {
        let corpus = corpus();
        assert_eq!(locate("alpha", &corpus, Position::START), Some(Position::new(0, 0)));
        assert_eq!(locate("theta", &corpus, Position::START), Some(Position::new(1, 2)));
        assert_eq!(locate("omega", &corpus, Position::START), None);
    }

    #[test]
    fn test_locate_respects_cursor() {
        let corpus = corpus();
        assert_eq!(locate("alpha", &corpus, Position::new(0, 1)), Some(Position::new(1, 1)));
        // the cursor line itself is still a candidate
        assert_eq!(locate("gamma", &corpus, Position::new(0, 1)), Some(Position::new(0, 1)));
        assert_eq!(locate("gamma", &corpus, Position::new(0, 2)), None);
    }

    #[test]
    fn test_later_documents_scan_from_first_line() {
        let corpus = corpus();
        // cursor line 2 in doc 0 must not skip line 0 of doc 1
        assert_eq!(locate("zeta", &corpus, Position::new(0, 2)), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_locate_is_case_sensitive() {
        let corpus = corpus();
        assert_eq!(locate("Alpha", &corpus, Position::START), None);
    }

    #[test]
    fn test_cursor_past_corpus_end() {
        let corpus = corpus();
        assert_eq!(locate("alpha", &corpus, Position::new(9, 0)), None);
        assert_eq!(locate("alpha", &corpus, Position::new(1, 50)), None);
    }
}
