//! Export summary and reporting

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// When the export started
    pub started_at: DateTime<Utc>,

    /// When the export finished successfully
    pub completed_at: Option<DateTime<Utc>>,

    /// Number of records received
    pub total_items: usize,

    /// Records skipped because they carry no images
    pub items_without_images: usize,

    /// Number of CSV rows written (one per image)
    pub total_rows: usize,

    /// Number of images fetched into the archive
    pub images_fetched: usize,

    /// Total size of fetched image data
    pub image_bytes: usize,

    /// Size of the finished archive
    pub archive_bytes: usize,

    /// Where the archive was saved, if it was
    pub output_path: Option<PathBuf>,

    /// Whether this was a dry run
    pub dry_run: bool,

    /// Duration of the export
    pub duration: Duration,
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSummary {
    /// Create a new empty export summary starting now
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            completed_at: None,
            total_items: 0,
            items_without_images: 0,
            total_rows: 0,
            images_fetched: 0,
            image_bytes: 0,
            archive_bytes: 0,
            output_path: None,
            dry_run: false,
            duration: Duration::ZERO,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Mark the export as completed now
    pub fn mark_completed(mut self) -> Self {
        self.completed_at = Some(Utc::now());
        self
    }

    /// Records that produced at least one row
    pub fn listed_items(&self) -> usize {
        self.total_items - self.items_without_images
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_items = self.total_items,
            items_without_images = self.items_without_images,
            rows = self.total_rows,
            images = self.images_fetched,
            image_bytes = self.image_bytes,
            archive_bytes = self.archive_bytes,
            dry_run = self.dry_run,
            started_at = %self.started_at.to_rfc3339(),
            duration_ms = self.duration.as_millis() as u64,
            "Export summary"
        );

        if self.items_without_images > 0 {
            tracing::warn!(
                count = self.items_without_images,
                "Items without images were left out of the CSV"
            );
        }
    }
}
