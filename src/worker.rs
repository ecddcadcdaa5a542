// WHY: Sequential alignment of one contiguous bitext shard
// The cursor is private to the worker so shards never coordinate with each other

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::corpus::Corpus;
use crate::locator::{locate, trim_sentence, Position};
use crate::record::{AlignmentRecord, Bitext, Indexed, MissingRecord, TaggedSentence};
use crate::speaker::resolve;

/// Settings shared by every shard worker of a run
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Language tag written next to primary sentences
    pub primary_language: String,
    /// Language tag written next to secondary sentences
    pub secondary_language: String,
    /// Log throughput every this many shard sentences (0 disables)
    pub report_every: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            primary_language: "de".to_string(),
            secondary_language: "en".to_string(),
            report_every: 25_000,
        }
    }
}

/// What happened to a single sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Found ahead of the cursor
    Aligned,
    /// Found only by rescanning the corpus from its start
    AlignedAfterReset,
    Missing,
}

/// Record produced for a single sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Aligned(AlignmentRecord),
    Missing(MissingRecord),
}

/// Observer notified after every sentence; never influences alignment
pub trait ProgressObserver: Send + Sync {
    fn on_sentence(&self, shard: usize, outcome: Outcome);
}

impl ProgressObserver for () {
    fn on_sentence(&self, _shard: usize, _outcome: Outcome) {}
}

impl ProgressObserver for indicatif::ProgressBar {
    fn on_sentence(&self, _shard: usize, _outcome: Outcome) {
        self.inc(1);
    }
}

/// Counters for the current reporting window
#[derive(Debug, Clone)]
pub struct ShardStats {
    pub started: Instant,
    pub processed: u64,
    pub resets: u64,
    pub missing: u64,
}

impl ShardStats {
    fn new() -> Self {
        Self {
            started: Instant::now(),
            processed: 0,
            resets: 0,
            missing: 0,
        }
    }

    /// Aligned sentences per second since the window started
    pub fn rate(&self) -> f64 {
        let secs = self.started.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.processed as f64 / secs
        } else {
            0.0
        }
    }
}

/// Totals for a finished shard
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ShardSummary {
    pub shard: usize,
    pub start: usize,
    pub end: usize,
    pub aligned: u64,
    pub resets: u64,
    pub missing: u64,
    pub processing_time_ms: u64,
}

/// Channel ends the worker writes its records into
#[derive(Debug, Clone)]
pub struct RecordSink {
    pub alignments: UnboundedSender<Indexed<AlignmentRecord>>,
    pub missing: UnboundedSender<Indexed<MissingRecord>>,
}

/// Aligns the sentences of one shard against the corpus
pub struct ShardWorker<'a> {
    id: usize,
    range: Range<usize>,
    corpus: &'a Corpus,
    bitext: &'a Bitext,
    config: &'a WorkerConfig,
    cursor: Position,
    window: ShardStats,
    summary: ShardSummary,
}

impl<'a> ShardWorker<'a> {
    pub fn new(
        id: usize,
        range: Range<usize>,
        corpus: &'a Corpus,
        bitext: &'a Bitext,
        config: &'a WorkerConfig,
    ) -> Self {
        let summary = ShardSummary {
            shard: id,
            start: range.start,
            end: range.end,
            ..Default::default()
        };
        Self {
            id,
            range,
            corpus,
            bitext,
            config,
            cursor: Position::START,
            window: ShardStats::new(),
            summary,
        }
    }

    /// Last confirmed match location
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn summary(&self) -> &ShardSummary {
        &self.summary
    }

    /// Align the sentence at bitext `index` and update cursor and counters.
    ///
    /// A miss after the cursor falls back to one full rescan from the corpus
    /// start. A sentence missing from the whole corpus leaves the cursor where
    /// it was so the next search still starts from the last confirmed match.
    pub fn process_sentence(&mut self, index: usize) -> (Emitted, Outcome) {
        let sentence = self.bitext.primary(index);
        let target = trim_sentence(sentence);

        let found = match locate(target, self.corpus, self.cursor) {
            Some(position) => Some((position, Outcome::Aligned)),
            None => locate(target, self.corpus, Position::START)
                .map(|position| (position, Outcome::AlignedAfterReset)),
        };

        let Some((position, outcome)) = found else {
            debug!(shard = self.id, index, "Sentence not found in corpus: {}", target);
            self.window.missing += 1;
            self.summary.missing += 1;
            return (Emitted::Missing(MissingRecord(sentence.to_string())), Outcome::Missing);
        };

        if outcome == Outcome::AlignedAfterReset {
            self.window.resets += 1;
            self.summary.resets += 1;
        }
        self.cursor = position;

        let record = AlignmentRecord {
            speaker: resolve(self.corpus, position.document, position.line),
            sentences: vec![
                TaggedSentence {
                    language: self.config.primary_language.clone(),
                    sentence: sentence.to_string(),
                },
                TaggedSentence {
                    language: self.config.secondary_language.clone(),
                    sentence: self.bitext.secondary(index).to_string(),
                },
            ],
        };
        self.window.processed += 1;
        self.summary.aligned += 1;

        (Emitted::Aligned(record), outcome)
    }

    /// Process the whole shard in index order, sending each record to `sink`
    pub fn run<O: ProgressObserver + ?Sized>(
        mut self,
        sink: &RecordSink,
        observer: &O,
    ) -> Result<ShardSummary> {
        let started = Instant::now();
        info!(shard = self.id, "Starting shard {} ({} to {})", self.id, self.range.start, self.range.end);

        for index in self.range.clone() {
            let (emitted, outcome) = self.process_sentence(index);
            match emitted {
                Emitted::Aligned(record) => sink
                    .alignments
                    .send(Indexed::new(index, record))
                    .map_err(|_| anyhow!("Alignment sink closed while shard {} was running", self.id))?,
                Emitted::Missing(record) => sink
                    .missing
                    .send(Indexed::new(index, record))
                    .map_err(|_| anyhow!("Missing-sentence sink closed while shard {} was running", self.id))?,
            }

            observer.on_sentence(self.id, outcome);
            self.report_window(index - self.range.start);
        }

        self.summary.processing_time_ms = started.elapsed().as_millis() as u64;
        info!(
            shard = self.id,
            aligned = self.summary.aligned,
            missing = self.summary.missing,
            resets = self.summary.resets,
            "Worker finished"
        );
        Ok(self.summary)
    }

    fn report_window(&mut self, local_index: usize) {
        let every = self.config.report_every;
        if every == 0 || local_index == 0 || local_index % every != 0 {
            return;
        }

        info!(
            shard = self.id,
            "Processed {} sentences, {} resets, {} missing ({:.0}/s)",
            local_index,
            self.window.resets,
            self.window.missing,
            self.window.rate()
        );
        self.window = ShardStats::new();
    }
}
