//! Local file system storage implementation

use crate::core::traits::RecordSink;
use crate::core::types::{ApiKey, WeatherRecord};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::types::StoredRecord;

/// Local file storage
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new local storage instance
    pub async fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        // Create directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(&path).await.map_err(|e| {
                GatewayError::FileStorage(format!("Failed to create storage directory: {}", e))
            })?;
        }

        info!("Local file storage initialized at: {}", path.display());
        Ok(Self { base_path: path })
    }

    /// Directory artifacts are written to
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Artifact name for a record: `{city_id}_{YYYYMMDD_HHMMSS}.json`
    pub fn file_name(record: &WeatherRecord) -> String {
        format!(
            "{}_{}.json",
            record.city_id,
            record.captured_at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Full path an artifact for `record` would be written to
    pub fn path_for(&self, record: &WeatherRecord) -> PathBuf {
        self.base_path.join(Self::file_name(record))
    }

    /// Read an artifact back
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<StoredRecord> {
        let path = path.as_ref();
        let content = fs::read(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GatewayError::NotFound(format!("Artifact not found: {}", path.display()))
            } else {
                GatewayError::FileStorage(format!("Failed to read artifact: {}", e))
            }
        })?;

        serde_json::from_slice(&content)
            .map_err(|e| GatewayError::FileStorage(format!("Failed to parse artifact: {}", e)))
    }

    /// List artifact file names, sorted
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| GatewayError::FileStorage(format!("Failed to read directory: {}", e)))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| GatewayError::FileStorage(format!("Failed to read entry: {}", e)))?
        {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.ends_with(".json") {
                files.push(file_name);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        if !self.base_path.exists() {
            return Err(GatewayError::FileStorage(
                "Storage directory does not exist".to_string(),
            ));
        }

        // Try to write a test file
        let test_file = self.base_path.join(".health_check");
        fs::write(&test_file, b"health_check")
            .await
            .map_err(|e| GatewayError::FileStorage(format!("Storage not writable: {}", e)))?;

        let _ = fs::remove_file(&test_file).await;

        Ok(())
    }

    /// Write a freshly claimed artifact, removing it again if the write fails
    pub(crate) async fn fill<W>(mut file: W, path: &Path, content: &[u8]) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let written = async {
            file.write_all(content).await?;
            file.flush().await
        }
        .await;
        drop(file);

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(path).await {
                warn!(path = %path.display(), error = %cleanup, "Failed to remove partial artifact");
            }
            return Err(GatewayError::FileStorage(format!(
                "Failed to write artifact: {}",
                e
            )));
        }
        Ok(())
    }

    /// Serialize with four-space indentation
    fn encode(stored: &StoredRecord) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        stored.serialize(&mut serializer)?;
        Ok(buf)
    }
}

#[async_trait]
impl RecordSink for LocalStorage {
    async fn persist(&self, record: &WeatherRecord, api_key: &ApiKey) -> Result<PathBuf> {
        let path = self.path_for(record);
        let content = Self::encode(&StoredRecord::new(record, api_key))?;

        // create_new: a same-second artifact for this city is never replaced
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                if e.kind() == ErrorKind::AlreadyExists {
                    GatewayError::FileStorage(format!(
                        "Artifact already exists: {}",
                        path.display()
                    ))
                } else {
                    GatewayError::FileStorage(format!("Failed to create artifact: {}", e))
                }
            })?;

        Self::fill(file, &path, &content).await?;

        debug!(city_id = %record.city_id, path = %path.display(), "Record persisted");
        Ok(path)
    }
}
