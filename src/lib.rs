//! # Lotpack - auction listing exporter
//!
//! Lotpack turns auction listing records into a Yahoo! Auctions bulk-listing
//! package: one ZIP archive holding a BOM-prefixed CSV with one row per
//! listing image, plus every image fetched from its URL.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Row mapping, title generation, CSV rendering and export orchestration
//! - [`adapters`] - External integrations (HTTP image fetching, ZIP archives, JSON input)
//! - [`domain`] - Listing records and the error type
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lotpack::adapters::load_items;
//! use lotpack::config::load_config;
//! use lotpack::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("lotpack.toml")?;
//!     let items = load_items("items.json").await?;
//!
//!     let coordinator = ExportCoordinator::new(config)?;
//!     let summary = coordinator.execute_export(&items).await?;
//!
//!     println!("Wrote {} rows and {} images", summary.total_rows, summary.images_fetched);
//!     Ok(())
//! }
//! ```
//!
//! ## Rows and Titles
//!
//! Each image of a record becomes its own row. The title is the image's base
//! name, a full-width ordinal and as many words of the marketing suffix as fit
//! in the 65-character budget:
//!
//! ```rust
//! use lotpack::core::title::generate_title;
//!
//! let title = generate_title("Cover", 0);
//! assert!(title.starts_with("Cover（1） "));
//! assert!(title.chars().count() <= 65);
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::LotpackError`]. The export is
//! all-or-nothing: the first image that cannot be fetched aborts it and no
//! archive is written.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
