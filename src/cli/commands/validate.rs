//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Lotpack configuration file.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!(
            "  Input: {}",
            config.input.items_path.as_deref().unwrap_or("(from --input)")
        );
        println!("  Fetch Timeout: {}s", config.fetch.timeout_seconds);
        println!("  Fetch Concurrency: {}", config.fetch.concurrency);
        println!(
            "  Archive: {}/{}",
            config.archive.output_dir, config.archive.file_name
        );
        println!("  CSV Entry: {}", config.archive.csv_name);
        println!("  Compression Level: {}", config.archive.compression_level);
        println!("  Title Budget: {} chars", config.title.max_length);
        println!();

        Ok(EXIT_OK)
    }
}
