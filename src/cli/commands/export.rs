//! Export command implementation
//!
//! This module implements the `export` command, which turns a JSON file of
//! listing records into one archive holding the listing CSV and every image.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_INPUT, EXIT_OK};
use crate::adapters::load_items;
use crate::config::{load_config, LotpackConfig};
use crate::core::export::{ExportCoordinator, ExportSummary};
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// JSON file with listing records (overrides input.items_path)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory the archive is written into (overrides archive.output_dir)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Dry run mode - build the CSV but fetch and write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG);
        }

        let Some(items_path) = config.input.items_path.clone() else {
            tracing::error!("No listing input configured");
            eprintln!("No listing input given. Pass --input or set input.items_path");
            return Ok(EXIT_CONFIG);
        };

        let items = match load_items(&items_path).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load listing records");
                eprintln!("Failed to load listing records: {e}");
                return Ok(EXIT_INPUT);
            }
        };

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No images will be fetched and no archive written");
            println!();
        }

        let coordinator = match ExportCoordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        println!("🚀 Exporting {} listing records...", items.len());

        let summary = match coordinator.execute_export(&items).await {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Export failed: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        print_summary(&summary);
        Ok(EXIT_OK)
    }

    fn apply_overrides(&self, config: &mut LotpackConfig) {
        if let Some(input) = &self.input {
            tracing::info!(input = %input, "Overriding listing input from CLI");
            config.input.items_path = Some(input.clone());
        }

        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.archive.output_dir = dir.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    println!("📊 Export Summary:");
    println!("  Records: {}", summary.total_items);
    println!("  Listed: {}", summary.listed_items());
    if summary.items_without_images > 0 {
        println!("  Skipped (no images): {}", summary.items_without_images);
    }
    println!("  CSV Rows: {}", summary.total_rows);
    println!("  Images: {}", summary.images_fetched);
    println!(
        "  Started: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    match &summary.output_path {
        Some(path) => println!("  Archive: {} ({} bytes)", path.display(), summary.archive_bytes),
        None if summary.dry_run => println!("  Archive: not written (dry run)"),
        None => {}
    }
    println!();
}
