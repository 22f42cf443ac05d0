//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "lotpack.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Lotpack configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point input.items_path at your listing JSON (or pass --input)");
                println!("  3. Validate configuration: lotpack validate-config");
                println!("  4. Run export: lotpack export");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Sample configuration with every setting at its default
    pub fn generate_config() -> String {
        r#"# Lotpack Configuration File
# Values of the form ${VAR} are read from the environment (or .env).
# Any setting can also be overridden with LOTPACK_<SECTION>_<KEY>.

[application]
# trace, debug, info, warn, error
log_level = "info"
# Build the CSV but fetch no images and write no archive
dry_run = false

[input]
# JSON array of listing records; --input overrides this
# items_path = "items.json"

[fetch]
timeout_seconds = 30
connect_timeout_seconds = 10
# Images fetched ahead of the one being archived (1-32)
concurrency = 1
tls_verify = true

[archive]
# output_dir = "${HOME}/Downloads"
output_dir = "."
file_name = "yahoo_auction_export.zip"
csv_name = "yahoo_auction_items.csv"
image_extension = "jpg"
# Deflate level, 0-9
compression_level = 9

[title]
max_length = 65
# suffix = "..."  (space-delimited phrase appended to every title)

[logging]
local_enabled = false
local_path = "logs"
# daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = parse_config(&InitArgs::generate_config()).unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.archive.file_name, "yahoo_auction_export.zip");
        assert_eq!(config.archive.compression_level, 9);
        assert_eq!(config.fetch.concurrency, 1);
        assert_eq!(config.title.max_length, 65);
        assert!(config.input.items_path.is_none());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lotpack.toml");
        fs::write(&path, "keep me").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), EXIT_CONFIG);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[tokio::test]
    async fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lotpack.toml");
        fs::write(&path, "old").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };

        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
        assert!(fs::read_to_string(&path).unwrap().contains("[archive]"));
    }
}
