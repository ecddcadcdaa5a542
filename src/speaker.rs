// WHY: Backward scan from a matched line to the speaker turn that covers it
// Kept pure so workers can call it concurrently on the shared corpus

use serde::{Deserialize, Serialize};

use crate::corpus::{classify_line, Corpus, LineKind, SpeakerTag};

/// Speaker attributes attached to an aligned sentence pair
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SpeakerMeta {
    pub language: String,
    pub name: String,
    pub id: String,
}

impl SpeakerMeta {
    pub fn is_empty(&self) -> bool {
        self.language.is_empty() && self.name.is_empty() && self.id.is_empty()
    }
}

impl From<SpeakerTag> for SpeakerMeta {
    fn from(tag: SpeakerTag) -> Self {
        Self {
            language: tag.language,
            name: tag.name,
            id: tag.id,
        }
    }
}

/// Resolve the speaker active at `line` of document `doc`.
///
/// Walks upwards from the line before `line`. A chapter boundary ends any
/// carried-over speaker context and yields empty metadata, the first speaker
/// marker yields its attributes, and reaching the top of the document (or an
/// unknown document) yields empty metadata.
pub fn resolve(corpus: &Corpus, doc: usize, line: usize) -> SpeakerMeta {
    let Some(document) = corpus.documents().get(doc) else {
        return SpeakerMeta::default();
    };
    let upper = line.min(document.len());

    for text in document.lines()[..upper].iter().rev() {
        match classify_line(text) {
            LineKind::ChapterBoundary => return SpeakerMeta::default(),
            LineKind::SpeakerTurn(tag) => return tag.into(),
            LineKind::Plain => {}
        }
    }

    SpeakerMeta::default()
}
