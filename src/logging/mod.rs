//! Logging and observability
//!
//! Structured logging through `tracing`:
//! - Human-readable console output on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Optional JSON file logging with daily or hourly rotation
//!
//! # Example
//!
//! ```no_run
//! use lotpack::logging::init_logging;
//! use lotpack::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use lotpack::log_export_start;
///
/// log_export_start!(3, 12);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($items:expr, $images:expr) => {
        tracing::info!(items = $items, images = $images, "Starting export");
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use lotpack::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(12, 12, Duration::from_secs(4));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($rows:expr, $images:expr, $duration:expr) => {
        tracing::info!(
            rows = $rows,
            images = $images,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}
