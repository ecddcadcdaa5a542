use anyhow::{ensure, Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::corpus::{Corpus, Document};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
        }
    }
}

/// Statistics for a single file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Async line reader for bitext files and transcripts.
/// Any I/O or decoding error aborts the load; nothing is aligned from partial input.
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read file contents line by line, without line terminators
    pub async fn read_file_lines<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut result_lines = Vec::new();
        let mut byte_count = 0u64;

        while let Some(line) = lines.next_line().await.with_context(|| {
            format!(
                "Read error in {} at line {}",
                path.display(),
                result_lines.len() + 1
            )
        })? {
            byte_count += line.len() as u64 + 1; // +1 for newline
            result_lines.push(line);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: result_lines.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        debug!(
            "Read {}: {} lines, {} bytes in {}ms",
            stats.file_path, stats.lines_read, stats.bytes_read, stats.duration_ms
        );
        Ok((result_lines, stats))
    }

    /// Load every regular file directly inside `dir` as one corpus document.
    /// Subdirectories and other non-file entries are skipped; documents are
    /// ordered by file name.
    pub async fn read_corpus_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Corpus> {
        let dir = dir.as_ref();
        let paths = list_transcript_files(dir)?;
        info!("Reading {} transcript files from {}", paths.len(), dir.display());

        let mut documents = Vec::with_capacity(paths.len());
        let mut total_bytes = 0u64;
        for path in &paths {
            let (lines, stats) = self.read_file_lines(path).await?;
            total_bytes += stats.bytes_read;
            documents.push(Document::new(lines));
        }

        let corpus = Corpus::new(documents);
        info!(
            "Source files read: {} documents, {} lines, {} bytes",
            corpus.document_count(),
            corpus.total_lines(),
            total_bytes
        );
        Ok(corpus)
    }
}

/// Regular files directly inside `dir`, sorted by file name
pub fn list_transcript_files(dir: &Path) -> Result<Vec<PathBuf>> {
    ensure!(dir.is_dir(), "Transcript path is not a directory: {}", dir.display());

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        } else {
            debug!("Skipping non-file entry: {}", entry.path().display());
        }
    }
    Ok(paths)
}

/// Convenience function for reading a single line file with default configuration
pub async fn read_lines<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let reader = AsyncFileReader::new(ReaderConfig::default());
    let (lines, _stats) = reader.read_file_lines(file_path).await?;
    Ok(lines)
}
