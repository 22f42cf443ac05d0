//! Listing input loading
//!
//! Records are produced elsewhere and handed over as a JSON array.

use crate::domain::{AuctionItem, LotpackError, Result};
use std::path::Path;

/// Reads the listing records from a JSON file
///
/// # Errors
///
/// Returns [`LotpackError::Input`] if the file is missing, unreadable, or not
/// a JSON array of complete records
pub async fn load_items(path: impl AsRef<Path>) -> Result<Vec<AuctionItem>> {
    let path = path.as_ref();

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LotpackError::Input(format!("Failed to read {}: {e}", path.display())))?;

    let items = parse_items(&contents)
        .map_err(|e| LotpackError::Input(format!("{}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), items = items.len(), "Loaded listing records");
    Ok(items)
}

/// Parses a JSON array of listing records
pub fn parse_items(json: &str) -> std::result::Result<Vec<AuctionItem>, serde_json::Error> {
    serde_json::from_str(json)
}
