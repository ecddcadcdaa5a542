// WHY: JSON artifacts written at the end of a run
// Alignments and missing sentences go to separate files so a run always leaves both behind

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

use crate::record::{AlignmentRecord, MissingRecord};

/// Default location of the missing-sentence file: `<stem>_missing.json` beside `output`
pub fn missing_output_path(output: &Path) -> PathBuf {
    let file_stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    output.with_file_name(format!("{file_stem}_missing.json"))
}

/// Serialize `value` as JSON into `path`, creating parent directories
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}

/// Write the alignment array
pub async fn write_alignments(path: &Path, records: &[AlignmentRecord]) -> Result<()> {
    write_json(path, records).await?;
    info!("Wrote {} alignments to {}", records.len(), path.display());
    Ok(())
}

/// Write the missing-sentence array
pub async fn write_missing(path: &Path, records: &[MissingRecord]) -> Result<()> {
    write_json(path, records).await?;
    info!("Wrote {} missing sentences to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TaggedSentence;
    use crate::speaker::SpeakerMeta;
    use tempfile::TempDir;

    #[test]
    fn test_missing_output_path() {
        assert_eq!(
            missing_output_path(Path::new("/data/out.json")),
            PathBuf::from("/data/out_missing.json")
        );
        assert_eq!(
            missing_output_path(Path::new("aligned")),
            PathBuf::from("aligned_missing.json")
        );
    }

    #[tokio::test]
    async fn test_write_alignments_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested/out.json");
        let records = vec![AlignmentRecord {
            speaker: SpeakerMeta::default(),
            sentences: vec![TaggedSentence {
                language: "de".to_string(),
                sentence: "Ja.".to_string(),
            }],
        }];

        write_alignments(&out, &records).await.unwrap();
        write_missing(&missing_output_path(&out), &[MissingRecord("Nein.".to_string())])
            .await
            .unwrap();

        let written: Vec<AlignmentRecord> =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written, records);

        let missing = std::fs::read_to_string(temp_dir.path().join("nested/out_missing.json")).unwrap();
        assert_eq!(missing, r#"["Nein."]"#);
    }

    #[tokio::test]
    async fn test_empty_collections_still_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        write_missing(&path, &[]).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
