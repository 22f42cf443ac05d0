//! Domain error types
//!
//! This module defines the error hierarchy for Lotpack. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Lotpack error type
///
/// This is the primary error type used throughout the application.
/// Third-party errors are flattened into string payloads at the boundary.
#[derive(Debug, Error)]
pub enum LotpackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Listing input could not be read or parsed
    #[error("Input error: {0}")]
    Input(String),

    /// An image could not be added to the export
    ///
    /// Aborts the whole export; no archive is produced.
    #[error("Failed to add image {position} ({url}) to the export: {message}")]
    ImageFetch {
        /// 1-based position of the image across the whole export
        position: usize,
        /// Source URL of the image
        url: String,
        /// Underlying failure
        message: String,
    },

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// CSV rendering errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Archive assembly errors
    #[error("Archive error: {0}")]
    Archive(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for LotpackError {
    fn from(err: std::io::Error) -> Self {
        LotpackError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LotpackError {
    fn from(err: serde_json::Error) -> Self {
        LotpackError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LotpackError {
    fn from(err: toml::de::Error) -> Self {
        LotpackError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for LotpackError {
    fn from(err: csv::Error) -> Self {
        LotpackError::Csv(err.to_string())
    }
}

impl From<zip::result::ZipError> for LotpackError {
    fn from(err: zip::result::ZipError) -> Self {
        LotpackError::Archive(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lotpack_error_display() {
        let err = LotpackError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_image_fetch_error_display() {
        let err = LotpackError::ImageFetch {
            position: 2,
            url: "https://img.example.com/b.jpg".to_string(),
            message: "HTTP 404".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to add image 2 (https://img.example.com/b.jpg) to the export: HTTP 404"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: LotpackError = io_err.into();
        assert!(matches!(err, LotpackError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LotpackError = json_err.into();
        assert!(matches!(err, LotpackError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: LotpackError = toml_err.into();
        assert!(matches!(err, LotpackError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_zip_error_conversion() {
        let zip_err = zip::result::ZipError::FileNotFound;
        let err: LotpackError = zip_err.into();
        assert!(matches!(err, LotpackError::Archive(_)));
    }

    #[test]
    fn test_lotpack_error_implements_std_error() {
        let err = LotpackError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
