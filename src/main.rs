use anyhow::Result;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;

use eurol1::coordinator::{align_bitext, AlignConfig};
use eurol1::output::{missing_output_path, write_alignments, write_json, write_missing};
use eurol1::reader::{AsyncFileReader, ReaderConfig};
use eurol1::record::Bitext;
use eurol1::stats::{LanguageStats, RunStats};
use eurol1::worker::{ProgressObserver, WorkerConfig};

#[derive(Parser, Debug)]
#[command(name = "eurol1")]
#[command(about = "Aligns bitext sentences with speaker metadata from annotated transcripts")]
#[command(version)]
struct Args {
    /// Sentence-aligned file in the primary language
    primary: Option<PathBuf>,

    /// Sentence-aligned file in the secondary language
    secondary: Option<PathBuf>,

    /// Directory of annotated transcript files
    transcripts: Option<PathBuf>,

    /// Output JSON file for aligned records
    output: Option<PathBuf>,

    /// Number of shards processed in parallel (0 = one per CPU core)
    #[arg(long, default_value_t = 4)]
    shards: usize,

    /// Language tag for primary sentences
    #[arg(long, default_value = "de")]
    primary_lang: String,

    /// Language tag for secondary sentences
    #[arg(long, default_value = "en")]
    secondary_lang: String,

    /// Log worker throughput every N sentences (0 disables)
    #[arg(long, default_value_t = 25_000)]
    report_every: usize,

    /// Missing-sentence output file [default: <output-stem>_missing.json]
    #[arg(long)]
    missing_out: Option<PathBuf>,

    /// Write run and speaker-language statistics to this file
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Keep records in arrival order instead of input order
    #[arg(long)]
    arrival_order: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,
}

impl Args {
    fn align_config(&self) -> AlignConfig {
        let shards = if self.shards == 0 { num_cpus::get() } else { self.shards };
        AlignConfig {
            shards,
            preserve_order: !self.arrival_order,
            worker: WorkerConfig {
                primary_language: self.primary_lang.clone(),
                secondary_language: self.secondary_lang.clone(),
                report_every: self.report_every,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();

    let (Some(primary), Some(secondary), Some(transcripts), Some(output)) = (
        args.primary.clone(),
        args.secondary.clone(),
        args.transcripts.clone(),
        args.output.clone(),
    ) else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    info!(?args, "Parsed CLI arguments");
    let run_start = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let started = Instant::now();

    let reader = AsyncFileReader::new(ReaderConfig::default());
    let (primary_lines, _) = reader.read_file_lines(&primary).await?;
    let (secondary_lines, _) = reader.read_file_lines(&secondary).await?;
    info!("Aligned files read.");
    let bitext = Bitext::new(primary_lines, secondary_lines)?;

    let corpus = reader.read_corpus_dir(&transcripts).await?;

    let config = args.align_config();
    let progress = if args.no_progress {
        None
    } else {
        let bar = ProgressBar::new(bitext.len() as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} sentences ({per_sec}, eta {eta})",
            )?
            .progress_chars("=> "),
        );
        Some(bar)
    };
    let observer: Arc<dyn ProgressObserver> = match &progress {
        Some(bar) => Arc::new(bar.clone()),
        None => Arc::new(()),
    };

    let result = align_bitext(Arc::new(corpus), Arc::new(bitext), &config, observer).await?;
    if let Some(bar) = progress {
        bar.finish();
    }

    let missing_path = args
        .missing_out
        .clone()
        .unwrap_or_else(|| missing_output_path(&output));
    write_alignments(&output, &result.alignments).await?;
    write_missing(&missing_path, &result.missing).await?;

    if let Some(stats_path) = &args.stats_out {
        let stats = RunStats {
            run_start,
            total_processing_time_ms: started.elapsed().as_millis() as u64,
            languages: LanguageStats::from_records(&result.alignments),
            summary: result.summary.clone(),
        };
        write_json(stats_path, &stats).await?;
        info!("Wrote run statistics to {}", stats_path.display());
    }

    println!("eurol1 v{} - alignment complete", env!("CARGO_PKG_VERSION"));
    println!("  Sentences: {}", result.summary.sentences_total);
    println!("  Aligned:   {}", result.summary.aligned);
    println!("  Missing:   {}", result.summary.missing);
    println!("  Resets:    {}", result.summary.resets);

    Ok(())
}
