// WHY: Input bitext and the two kinds of per-sentence output records
// Every bitext index ends up as exactly one of AlignmentRecord or MissingRecord

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::speaker::SpeakerMeta;

/// Two index-aligned sentence sequences; `primary[i]` translates to `secondary[i]`
#[derive(Debug, Clone, Default)]
pub struct Bitext {
    primary: Vec<String>,
    secondary: Vec<String>,
}

impl Bitext {
    /// Pair two sentence lists, rejecting lists of different length
    pub fn new(primary: Vec<String>, secondary: Vec<String>) -> Result<Self> {
        ensure!(
            primary.len() == secondary.len(),
            "Bitext sides differ in length: {} primary vs {} secondary sentences",
            primary.len(),
            secondary.len()
        );
        Ok(Self { primary, secondary })
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn primary(&self, index: usize) -> &str {
        &self.primary[index]
    }

    pub fn secondary(&self, index: usize) -> &str {
        &self.secondary[index]
    }
}

/// One sentence of an aligned pair with its language tag
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaggedSentence {
    pub language: String,
    pub sentence: String,
}

/// A matched bitext pair with the speaker found at its corpus location
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub speaker: SpeakerMeta,
    pub sentences: Vec<TaggedSentence>,
}

/// Original, untrimmed primary sentence that could not be found in the corpus
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct MissingRecord(pub String);

/// A record tagged with the bitext index it was produced for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indexed<T> {
    pub index: usize,
    pub record: T,
}

impl<T> Indexed<T> {
    pub fn new(index: usize, record: T) -> Self {
        Self { index, record }
    }
}
