use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::types::PromptRecord;

/// Persistence seam for the transformed document.
#[async_trait]
pub trait Sink: Send + Sync {
    async fn store(&self, records: &[PromptRecord]) -> Result<()>;
}

/// Writes the document as pretty-printed JSON, overwriting the target file.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Sink for JsonFileSink {
    async fn store(&self, records: &[PromptRecord]) -> Result<()> {
        // Two-space indentation; serde_json leaves non-ASCII text unescaped.
        let text =
            serde_json::to_string_pretty(records).context("serializing archive document")?;
        tokio::fs::write(&self.path, text)
            .await
            .with_context(|| format!("writing archive to {}", self.path.display()))?;
        info!("archive written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PromptRecord> {
        vec![
            PromptRecord {
                title: Some("Greeting".to_string()),
                content: Some("你好".to_string()),
                category: Some("demo".to_string()),
                id: "1234567890123".to_string(),
            },
            PromptRecord {
                title: None,
                content: Some("fallback".to_string()),
                category: None,
                id: "1234567890124".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.json");
        let records = sample();

        JsonFileSink::new(&path).store(&records).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let read_back: Vec<PromptRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(read_back, records);
    }

    #[tokio::test]
    async fn writes_pretty_json_with_literal_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.json");

        JsonFileSink::new(&path).store(&sample()).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("你好"), "non-ASCII must not be escaped");
        assert!(text.contains("  \"title\": \"Greeting\""), "expected 2-space indent");
        assert!(text.starts_with('['), "document is a top-level array");
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.json");
        std::fs::write(&path, "stale content that is much longer than the new document").unwrap();

        JsonFileSink::new(&path).store(&sample()[..1]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        serde_json::from_str::<Vec<PromptRecord>>(&text).unwrap();
    }

    #[tokio::test]
    async fn reports_failure_for_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("archive.json");

        let err = JsonFileSink::new(&path).store(&sample()).await.unwrap_err();
        assert!(err.to_string().contains("archive.json"));
    }
}
