// WHY: Splits the bitext into shards, runs one worker per shard and collects the records
// Workers are CPU bound, so they run on the blocking pool and report through unbounded channels

use anyhow::{bail, ensure, Context, Result};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::info;

use crate::corpus::Corpus;
use crate::record::{AlignmentRecord, Bitext, Indexed, MissingRecord};
use crate::worker::{ProgressObserver, RecordSink, ShardSummary, ShardWorker, WorkerConfig};

/// Run-level alignment settings
#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Number of shards processed in parallel
    pub shards: usize,
    /// Sort drained records by bitext index instead of arrival order
    pub preserve_order: bool,
    pub worker: WorkerConfig,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            shards: 4,
            preserve_order: true,
            worker: WorkerConfig::default(),
        }
    }
}

/// Aggregated statistics over all shards of a run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub sentences_total: usize,
    pub aligned: u64,
    pub missing: u64,
    pub resets: u64,
    pub processing_time_ms: u64,
    pub shards: Vec<ShardSummary>,
}

/// Everything a run produces
#[derive(Debug, Clone, Default)]
pub struct AlignmentOutput {
    pub alignments: Vec<AlignmentRecord>,
    pub missing: Vec<MissingRecord>,
    pub summary: RunSummary,
}

/// Split `[0, len)` into at most `shards` contiguous ranges of `ceil(len / shards)` items.
/// The last range may be shorter; empty ranges are not produced.
pub fn partition(len: usize, shards: usize) -> Result<Vec<Range<usize>>> {
    ensure!(shards > 0, "Shard count must be at least 1");

    let batch_size = len.div_ceil(shards);
    let ranges: Vec<Range<usize>> = (0..shards)
        .map(|k| (k * batch_size).min(len)..((k + 1) * batch_size).min(len))
        .filter(|range| !range.is_empty())
        .collect();

    verify_exact_cover(&ranges, len)?;
    Ok(ranges)
}

/// Check that `ranges` cover `[0, len)` in order with no gap and no overlap
pub fn verify_exact_cover(ranges: &[Range<usize>], len: usize) -> Result<()> {
    let mut expected_start = 0;
    for range in ranges {
        if range.start != expected_start || range.end < range.start {
            bail!(
                "Shard range {}..{} breaks coverage (expected start {})",
                range.start,
                range.end,
                expected_start
            );
        }
        expected_start = range.end;
    }
    ensure!(
        expected_start == len,
        "Shards cover {} of {} sentences",
        expected_start,
        len
    );
    Ok(())
}

fn drain<T>(rx: &mut mpsc::UnboundedReceiver<Indexed<T>>, preserve_order: bool) -> Vec<T> {
    let mut items = Vec::new();
    while let Ok(item) = rx.try_recv() {
        items.push(item);
    }
    if preserve_order {
        items.sort_by_key(|item| item.index);
    }
    items.into_iter().map(|item| item.record).collect()
}

/// Align every sentence of `bitext` against `corpus`.
///
/// Returns once all shards have finished. Each bitext index yields exactly one
/// alignment or one missing record.
pub async fn align_bitext(
    corpus: Arc<Corpus>,
    bitext: Arc<Bitext>,
    config: &AlignConfig,
    observer: Arc<dyn ProgressObserver>,
) -> Result<AlignmentOutput> {
    let started = Instant::now();
    let ranges = partition(bitext.len(), config.shards)?;

    info!("Input (aligned sentences): {}", bitext.len());
    info!(
        "Corpus: {} documents, {} lines",
        corpus.document_count(),
        corpus.total_lines()
    );
    info!("Batch size: {}", ranges.first().map_or(0, |r| r.len()));

    // WHY: unbounded sinks; the only consumer drains after every producer has finished
    let (alignment_tx, mut alignment_rx) = mpsc::unbounded_channel();
    let (missing_tx, mut missing_rx) = mpsc::unbounded_channel();
    let sink = RecordSink {
        alignments: alignment_tx,
        missing: missing_tx,
    };

    let worker_config = Arc::new(config.worker.clone());
    let handles: Vec<_> = ranges
        .into_iter()
        .enumerate()
        .map(|(id, range)| {
            let corpus = Arc::clone(&corpus);
            let bitext = Arc::clone(&bitext);
            let worker_config = Arc::clone(&worker_config);
            let observer = Arc::clone(&observer);
            let sink = sink.clone();
            tokio::task::spawn_blocking(move || {
                let worker = ShardWorker::new(id, range, &corpus, &bitext, &worker_config);
                worker.run(&sink, observer.as_ref())
            })
        })
        .collect();
    drop(sink);

    let mut summary = RunSummary {
        sentences_total: bitext.len(),
        ..Default::default()
    };
    for (id, joined) in join_all(handles).await.into_iter().enumerate() {
        let shard = joined.with_context(|| format!("Worker for shard {id} panicked"))??;
        summary.aligned += shard.aligned;
        summary.missing += shard.missing;
        summary.resets += shard.resets;
        summary.shards.push(shard);
    }

    let alignments = drain(&mut alignment_rx, config.preserve_order);
    let missing = drain(&mut missing_rx, config.preserve_order);
    summary.processing_time_ms = started.elapsed().as_millis() as u64;

    ensure!(
        alignments.len() + missing.len() == bitext.len(),
        "Collected {} alignments and {} missing records for {} sentences",
        alignments.len(),
        missing.len(),
        bitext.len()
    );

    info!(
        aligned = summary.aligned,
        missing = summary.missing,
        resets = summary.resets,
        "Done."
    );

    Ok(AlignmentOutput {
        alignments,
        missing,
        summary,
    })
}
