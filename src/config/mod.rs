//! Configuration management for Lotpack.
//!
//! Lotpack uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LOTPACK_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`InputConfig`] - Where listing records are read from
//! - [`FetchConfig`] - HTTP client settings for image fetching
//! - [`ArchiveConfig`] - Archive location, entry names and compression
//! - [`TitleConfig`] - Title budget and suffix phrase
//! - [`LoggingConfig`] - File logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [input]
//! items_path = "items.json"
//!
//! [fetch]
//! timeout_seconds = 30
//! concurrency = 1
//!
//! [archive]
//! output_dir = "${HOME}/Downloads"
//! file_name = "yahoo_auction_export.zip"
//! compression_level = 9
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use lotpack::config::load_config;
//!
//! # fn example() {
//! match load_config("lotpack.toml") {
//!     Ok(config) => println!("Writing to {}", config.archive.output_dir),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, ArchiveConfig, FetchConfig, InputConfig, LoggingConfig, LotpackConfig,
    TitleConfig,
};
