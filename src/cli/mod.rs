//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Lotpack using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Lotpack - auction listing exporter
#[derive(Parser, Debug)]
#[command(name = "lotpack")]
#[command(version, about, long_about = None)]
#[command(author = "Lotpack Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "lotpack.toml", env = "LOTPACK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOTPACK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export listing records as a CSV + images archive
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["lotpack", "export"]);
        assert_eq!(cli.config, "lotpack.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "lotpack",
            "export",
            "--input",
            "items.json",
            "--output-dir",
            "out",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.input.as_deref(), Some("items.json"));
                assert_eq!(args.output_dir.as_deref(), Some("out"));
                assert!(args.dry_run);
            }
            other => panic!("expected export, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["lotpack", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["lotpack", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["lotpack", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["lotpack", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.force);
                assert_eq!(args.output, "lotpack.toml");
            }
            other => panic!("expected init, got {other:?}"),
        }
    }
}
