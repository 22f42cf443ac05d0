//! ZIP archive assembly and delivery
//!
//! Archives are built fully in memory, then handed to an [`ArchiveSink`].
//! The default sink writes into a directory through a temporary file so a
//! failed export never leaves a partial archive behind.

use crate::domain::{LotpackError, Result};
use async_trait::async_trait;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Highest Deflate level accepted by [`ArchiveBuilder`]
pub const MAX_COMPRESSION_LEVEL: i32 = 9;

/// A named file inside the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the entry inside the archive
    pub name: String,

    /// Entry contents
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    /// Creates a text entry, stored as UTF-8
    pub fn text(name: impl Into<String>, content: &str) -> Self {
        Self {
            name: name.into(),
            data: content.as_bytes().to_vec(),
        }
    }

    /// Creates a binary entry
    pub fn binary(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Collects entries and compresses them into a single ZIP blob
#[derive(Debug)]
pub struct ArchiveBuilder {
    entries: Vec<ArchiveEntry>,
    compression_level: i32,
}

impl ArchiveBuilder {
    /// Creates an empty builder using Deflate at `compression_level` (0-9)
    ///
    /// # Errors
    ///
    /// Returns an error if the level is out of range
    pub fn new(compression_level: i32) -> Result<Self> {
        if !(0..=MAX_COMPRESSION_LEVEL).contains(&compression_level) {
            return Err(LotpackError::Archive(format!(
                "Compression level must be between 0 and {MAX_COMPRESSION_LEVEL}, got {compression_level}"
            )));
        }

        Ok(Self {
            entries: Vec::new(),
            compression_level,
        })
    }

    /// Appends an entry; entries keep insertion order
    pub fn add(&mut self, entry: ArchiveEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Appends several entries
    pub fn extend(&mut self, entries: impl IntoIterator<Item = ArchiveEntry>) -> &mut Self {
        self.entries.extend(entries);
        self
    }

    /// Number of entries added so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries were added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compresses all entries into a ZIP blob
    ///
    /// CPU-bound; async callers should prefer [`ArchiveBuilder::build_async`].
    pub fn build(self) -> Result<Vec<u8>> {
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.compression_level));

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for entry in &self.entries {
            writer.start_file(entry.name.as_str(), options)?;
            writer.write_all(&entry.data)?;
        }

        let cursor = writer.finish()?;
        let bytes = cursor.into_inner();

        tracing::debug!(
            entries = self.entries.len(),
            bytes = bytes.len(),
            level = self.compression_level,
            "Built archive"
        );
        Ok(bytes)
    }

    /// Compresses on the blocking thread pool
    pub async fn build_async(self) -> Result<Vec<u8>> {
        tokio::task::spawn_blocking(move || self.build())
            .await
            .map_err(|e| LotpackError::Archive(format!("Archive task failed: {e}")))?
    }
}

/// Destination that receives the finished archive
#[async_trait]
pub trait ArchiveSink: Send + Sync {
    /// Delivers the archive under `file_name` and returns where it ended up
    async fn deliver(&self, archive: Vec<u8>, file_name: &str) -> Result<PathBuf>;
}

/// Saves archives into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`; the directory is created on demand
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ArchiveSink for DirectorySink {
    async fn deliver(&self, archive: Vec<u8>, file_name: &str) -> Result<PathBuf> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(LotpackError::Validation(format!(
                "Archive file name must be a bare file name, got '{file_name}'"
            )));
        }

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            LotpackError::Io(format!(
                "Failed to create output directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let target = self.dir.join(file_name);
        let partial = self.dir.join(format!(".{file_name}.partial"));

        if let Err(e) = write_then_rename(&partial, &target, &archive).await {
            // Drop the temporary file so nothing half-written is left behind
            if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                tracing::debug!(path = %partial.display(), error = %cleanup, "No partial archive to remove");
            }
            return Err(e);
        }

        tracing::info!(path = %target.display(), bytes = archive.len(), "Archive saved");
        Ok(target)
    }
}

async fn write_then_rename(partial: &Path, target: &Path, archive: &[u8]) -> Result<()> {
    tokio::fs::write(partial, archive).await.map_err(|e| {
        LotpackError::Io(format!("Failed to write {}: {e}", partial.display()))
    })?;
    tokio::fs::rename(partial, target).await.map_err(|e| {
        LotpackError::Io(format!(
            "Failed to move archive into place at {}: {e}",
            target.display()
        ))
    })?;
    Ok(())
}
