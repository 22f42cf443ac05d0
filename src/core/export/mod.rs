//! Export orchestration
//!
//! - Export coordination: rows, image fetching, archiving, delivery
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use summary::ExportSummary;
