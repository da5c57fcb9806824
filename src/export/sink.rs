//! Destinations for rendered reports.

use async_trait::async_trait;
use serde_json::json;
use std::path::PathBuf;

use crate::error::AppError;

/// Receives a finished report under its output name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Stores `contents` under `name`, replacing anything written before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Sink`] if the report cannot be stored.
    async fn write(&self, name: &str, contents: &str) -> Result<(), AppError>;
}

/// Writes each report to `<dir>/<name>`, truncating existing files.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

#[async_trait]
impl ReportSink for FileSink {
    async fn write(&self, name: &str, contents: &str) -> Result<(), AppError> {
        let path = self.path_for(name);

        tokio::fs::write(&path, contents).await.map_err(|e| {
            AppError::sink(
                format!("Failed to write {}: {e}", path.display()),
                json!({ "path": path.display().to_string() }),
            )
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Report written");
        Ok(())
    }
}
