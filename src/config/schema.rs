//! Configuration schema types
//!
//! This module defines the configuration structure for Lotpack. Every
//! section has defaults, so an empty file is a valid configuration.

use crate::core::title::{TitleGenerator, MAX_TITLE_LENGTH, TITLE_SUFFIX};
use serde::{Deserialize, Serialize};

/// Main Lotpack configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LotpackConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Listing input
    #[serde(default)]
    pub input: InputConfig,

    /// Image fetching
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Archive output
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// Title generation
    #[serde(default)]
    pub title: TitleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LotpackConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.fetch.validate()?;
        self.archive.validate()?;
        self.title.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (build rows, fetch and write nothing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Listing input configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// JSON file holding the listing records; may be supplied on the command line instead
    #[serde(default)]
    pub items_path: Option<String>,
}

/// Image fetching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Images fetched ahead of the one being archived; 1 = strictly sequential
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// TLS certificate verification enabled
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl FetchConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds == 0 {
            return Err("fetch.timeout_seconds must be > 0".to_string());
        }
        if self.connect_timeout_seconds == 0 {
            return Err("fetch.connect_timeout_seconds must be > 0".to_string());
        }
        if self.concurrency == 0 || self.concurrency > 32 {
            return Err(format!(
                "fetch.concurrency must be between 1 and 32, got {}",
                self.concurrency
            ));
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            user_agent: default_user_agent(),
            concurrency: default_concurrency(),
            tls_verify: true,
        }
    }
}

/// Archive output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Directory the archive is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Archive file name
    #[serde(default = "default_archive_name")]
    pub file_name: String,

    /// Name of the CSV entry inside the archive
    #[serde(default = "default_csv_name")]
    pub csv_name: String,

    /// Extension given to image entries
    #[serde(default = "default_image_extension")]
    pub image_extension: String,

    /// Deflate level, 0-9
    #[serde(default = "default_compression_level")]
    pub compression_level: i32,
}

impl ArchiveConfig {
    fn validate(&self) -> Result<(), String> {
        for (field, value) in [("archive.file_name", &self.file_name), ("archive.csv_name", &self.csv_name)] {
            if value.is_empty() {
                return Err(format!("{field} cannot be empty"));
            }
            if value.contains(['/', '\\']) {
                return Err(format!("{field} must be a bare file name, got '{value}'"));
            }
        }

        if self.image_extension.is_empty()
            || !self.image_extension.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(format!(
                "archive.image_extension must be alphanumeric, got '{}'",
                self.image_extension
            ));
        }

        if !(0..=9).contains(&self.compression_level) {
            return Err(format!(
                "archive.compression_level must be between 0 and 9, got {}",
                self.compression_level
            ));
        }

        Ok(())
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: default_archive_name(),
            csv_name: default_csv_name(),
            image_extension: default_image_extension(),
            compression_level: default_compression_level(),
        }
    }
}

/// Title generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleConfig {
    /// Maximum title length in characters
    #[serde(default = "default_max_title_length")]
    pub max_length: usize,

    /// Space-delimited marketing phrase appended to every title
    #[serde(default = "default_title_suffix")]
    pub suffix: String,
}

impl TitleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_length == 0 {
            return Err("title.max_length must be > 0".to_string());
        }
        Ok(())
    }

    /// Builds the title generator for these settings
    pub fn generator(&self) -> TitleGenerator {
        TitleGenerator::new(self.max_length, &self.suffix)
    }
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_title_length(),
            suffix: default_title_suffix(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("lotpack/{}", env!("CARGO_PKG_VERSION"))
}

fn default_concurrency() -> usize {
    1
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_archive_name() -> String {
    "yahoo_auction_export.zip".to_string()
}

fn default_csv_name() -> String {
    "yahoo_auction_items.csv".to_string()
}

fn default_image_extension() -> String {
    "jpg".to_string()
}

fn default_compression_level() -> i32 {
    9
}

fn default_max_title_length() -> usize {
    MAX_TITLE_LENGTH
}

fn default_title_suffix() -> String {
    TITLE_SUFFIX.to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
