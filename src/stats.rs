// WHY: Summary of speaker languages over the aligned records
// Shows how much of the dataset lacks a language label and which speakers cause it

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::coordinator::RunSummary;
use crate::record::AlignmentRecord;

/// Number of aligned records attributed to one speaker language
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}

/// Language breakdown of an alignment run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats {
    /// Records whose speaker has no language attribute
    pub sentences_without_language: u64,
    /// Distinct speaker names with no language attribute, first-seen order
    pub speakers_without_language: Vec<String>,
    /// Record count per speaker language (empty string included), first-seen order
    pub languages: Vec<LanguageCount>,
}

impl LanguageStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AlignmentRecord>,
    {
        let mut stats = Self::default();
        let mut seen_speakers = HashSet::new();

        for record in records {
            let language = &record.speaker.language;
            match stats.languages.iter_mut().find(|l| &l.language == language) {
                Some(entry) => entry.count += 1,
                None => stats.languages.push(LanguageCount {
                    language: language.clone(),
                    count: 1,
                }),
            }

            if language.is_empty() {
                stats.sentences_without_language += 1;
                if seen_speakers.insert(record.speaker.name.clone()) {
                    stats.speakers_without_language.push(record.speaker.name.clone());
                }
            }
        }

        stats
    }
}

/// Contents of the `--stats-out` file
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Unix timestamp (seconds) of the run start
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub summary: RunSummary,
    pub languages: LanguageStats,
}
