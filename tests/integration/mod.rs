// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for a temporary workspace with bitext files and a transcript directory
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a file relative to the fixture root, creating parent directories
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write one sentence per line
    pub fn create_sentence_file(&self, name: &str, sentences: &[&str]) -> PathBuf {
        self.create_file(name, &sentences.join("\n"))
    }

    /// Directory holding transcript files
    pub fn transcripts_dir(&self) -> PathBuf {
        self.root_path.join("transcripts")
    }

    /// Create a transcript file inside the transcript directory
    pub fn create_transcript(&self, name: &str, lines: &[&str]) -> PathBuf {
        self.create_file(Path::new("transcripts").join(name), &lines.join("\n"))
    }

    /// Path for an output artifact inside the fixture root
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.root_path.join(name)
    }
}
