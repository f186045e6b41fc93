use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::errors::{Error, Result};
use crate::records::SigningRecord;

use super::RecordStore;

/// Records kept as one pretty-printed JSON array on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `[]` when the file is missing or zero-length.
    pub async fn ensure_initialized(&self) -> Result<()> {
        let needs_init = match fs::metadata(&self.path).await {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => return Err(io_error("inspect", &self.path, e)),
        };

        if needs_init {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| io_error("create directory", parent, e))?;
            }
            fs::write(&self.path, b"[]")
                .await
                .map_err(|e| io_error("write", &self.path, e))?;
            tracing::info!("Initialised record store at {}", self.path.display());
        }

        Ok(())
    }

    async fn write_all(&self, records: &[SigningRecord]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|e| Error::Parse {
            message: e.to_string(),
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &bytes)
            .await
            .map_err(|e| io_error("write", &temp_path, e))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| io_error("replace", &self.path, e))?;

        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn append(&self, record: &SigningRecord) -> Result<()> {
        // A parse failure here must abort: rewriting would drop the old data.
        let mut records = self.read_all().await?;
        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::info!(
            "Stored record for {} on {} ({} total)",
            record.personnel_number,
            record.date,
            records.len()
        );
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<SigningRecord>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("read", &self.path, e)),
        };

        parse_records(&bytes)
    }
}

fn parse_records(bytes: &[u8]) -> Result<Vec<SigningRecord>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(bytes).map_err(|e| Error::Parse {
        message: e.to_string(),
    })
}

fn io_error(operation: &'static str, path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        operation,
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}
