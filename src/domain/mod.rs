//! Domain models and types for Lotpack.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Listing records** ([`AuctionItem`], [`Image`])
//! - **Error types** ([`LotpackError`])
//! - **Result type alias** ([`Result`])
//!
//! # Builder Pattern
//!
//! ```rust
//! use lotpack::domain::AuctionItemBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let item = AuctionItemBuilder::new()
//!     .category("2084005403")
//!     .start_price(1000)
//!     .image("Cover (1)", "https://img.example.com/cover.jpg")
//!     .build()?;
//! assert_eq!(item.images[0].base_name(), "Cover");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod item;
pub mod result;

pub use errors::LotpackError;
pub use item::{AuctionItem, AuctionItemBuilder, Image};
pub use result::Result;
