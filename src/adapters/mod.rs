//! External system integrations for Lotpack.
//!
//! - [`input`] - Listing records from JSON
//! - [`http`] - Image fetching behind the [`ImageFetcher`] trait
//! - [`archive`] - ZIP assembly and delivery behind the [`ArchiveSink`] trait
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies so the export orchestrator can be
//! exercised with in-memory fetchers and sinks:
//!
//! ```rust,no_run
//! use lotpack::adapters::{ArchiveBuilder, ArchiveEntry, ArchiveSink, DirectorySink};
//!
//! # async fn example() -> lotpack::domain::Result<()> {
//! let mut builder = ArchiveBuilder::new(9)?;
//! builder.add(ArchiveEntry::text("yahoo_auction_items.csv", "\u{FEFF}カテゴリ\n"));
//! let bytes = builder.build_async().await?;
//!
//! let sink = DirectorySink::new("out");
//! let path = sink.deliver(bytes, "yahoo_auction_export.zip").await?;
//! println!("Saved {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod http;
pub mod input;

pub use archive::{ArchiveBuilder, ArchiveEntry, ArchiveSink, DirectorySink};
pub use http::{HttpImageFetcher, ImageFetcher};
pub use input::load_items;
