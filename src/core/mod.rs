//! Core business logic for Lotpack.
//!
//! # Modules
//!
//! - [`mapper`] - Record → row mapping against the fixed header list
//! - [`title`] - Budgeted title generation
//! - [`text`] - Markup stripping and character-safe truncation
//! - [`document`] - CSV rendering
//! - [`export`] - Export orchestration and summary
//!
//! # Export Workflow
//!
//! 1. **Map**: every image of every record becomes one row
//! 2. **Render**: rows become a BOM-prefixed CSV document
//! 3. **Fetch**: images are downloaded in order; the first failure aborts
//! 4. **Pack**: CSV and images go into one ZIP archive
//! 5. **Deliver**: the archive is written to the output directory

pub mod document;
pub mod export;
pub mod mapper;
pub mod text;
pub mod title;
