//! Auction listing domain model
//!
//! This module defines the [`AuctionItem`] record and its [`Image`] entries.
//! Records arrive as a JSON array with camelCase field names.

use serde::{Deserialize, Serialize};

/// Token that starts a disambiguating suffix in an image display name,
/// e.g. `"Cover (2)"`.
const DISAMBIGUATION_TOKEN: &str = " (";

/// One image attached to an auction listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    /// Display name, possibly carrying a `" (N)"` de-duplication suffix
    pub name: String,

    /// Source URL the image bytes are fetched from
    pub url: String,
}

impl Image {
    /// Creates a new image entry
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Returns the display name with any previously appended `" (..."`
    /// suffix removed
    ///
    /// # Examples
    ///
    /// ```
    /// use lotpack::domain::Image;
    ///
    /// let image = Image::new("Cover (2)", "https://img.example.com/cover.jpg");
    /// assert_eq!(image.base_name(), "Cover");
    /// ```
    pub fn base_name(&self) -> &str {
        match self.name.find(DISAMBIGUATION_TOKEN) {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }
}

/// A single auction listing with all attributes required for export
///
/// Each image of the item becomes its own listing row in the CSV output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    /// Category identifier or path
    pub category: String,

    /// Free-text description, may contain HTML markup
    pub description: String,

    /// Starting price in yen
    pub start_price: u64,

    /// Buy-it-now price in yen, empty cell when absent
    #[serde(default)]
    pub buy_now_price: Option<u64>,

    /// Number of units offered
    pub quantity: u32,

    /// Auction duration in days
    pub auction_duration: u32,

    /// Hour of day at which the auction closes
    pub end_time: u32,

    /// Prefecture the item ships from
    pub shipping_from: String,

    /// Who pays the shipping (落札者 / 出品者)
    pub shipping_payer: String,

    /// Condition tag
    pub condition: String,

    /// Whether late bids extend the auction
    pub auto_extend: bool,

    /// Whether the seller may end the auction early
    pub early_termination: bool,

    /// Number of automatic relists
    pub auto_relist: u32,

    /// Featured-auction tag
    #[serde(default)]
    pub featured_category: String,

    /// Days until shipping label
    pub shipping_duration: String,

    /// Images in display order
    #[serde(default)]
    pub images: Vec<Image>,
}

impl AuctionItem {
    /// Returns true if the item contributes at least one listing row
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

/// Builder for [`AuctionItem`]
///
/// Everything except the category and start price has a listing default.
#[derive(Debug, Default)]
pub struct AuctionItemBuilder {
    category: Option<String>,
    description: Option<String>,
    start_price: Option<u64>,
    buy_now_price: Option<u64>,
    quantity: Option<u32>,
    auction_duration: Option<u32>,
    end_time: Option<u32>,
    shipping_from: Option<String>,
    shipping_payer: Option<String>,
    condition: Option<String>,
    auto_extend: bool,
    early_termination: bool,
    auto_relist: u32,
    featured_category: Option<String>,
    shipping_duration: Option<String>,
    images: Vec<Image>,
}

impl AuctionItemBuilder {
    /// Creates a new AuctionItemBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the start price
    pub fn start_price(mut self, price: u64) -> Self {
        self.start_price = Some(price);
        self
    }

    /// Sets the buy-it-now price
    pub fn buy_now_price(mut self, price: u64) -> Self {
        self.buy_now_price = Some(price);
        self
    }

    /// Sets the quantity
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the auction duration in days
    pub fn auction_duration(mut self, days: u32) -> Self {
        self.auction_duration = Some(days);
        self
    }

    /// Sets the closing hour
    pub fn end_time(mut self, hour: u32) -> Self {
        self.end_time = Some(hour);
        self
    }

    /// Sets the shipping origin prefecture
    pub fn shipping_from(mut self, prefecture: impl Into<String>) -> Self {
        self.shipping_from = Some(prefecture.into());
        self
    }

    /// Sets the shipping payer
    pub fn shipping_payer(mut self, payer: impl Into<String>) -> Self {
        self.shipping_payer = Some(payer.into());
        self
    }

    /// Sets the condition tag
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Sets the auto-extend flag
    pub fn auto_extend(mut self, enabled: bool) -> Self {
        self.auto_extend = enabled;
        self
    }

    /// Sets the early-termination flag
    pub fn early_termination(mut self, enabled: bool) -> Self {
        self.early_termination = enabled;
        self
    }

    /// Sets the relist count
    pub fn auto_relist(mut self, count: u32) -> Self {
        self.auto_relist = count;
        self
    }

    /// Sets the featured-auction tag
    pub fn featured_category(mut self, tag: impl Into<String>) -> Self {
        self.featured_category = Some(tag.into());
        self
    }

    /// Sets the shipping duration label
    pub fn shipping_duration(mut self, label: impl Into<String>) -> Self {
        self.shipping_duration = Some(label.into());
        self
    }

    /// Appends an image
    pub fn image(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.images.push(Image::new(name, url));
        self
    }

    /// Builds the item
    ///
    /// # Errors
    ///
    /// Returns an error if the category or start price is missing
    pub fn build(self) -> Result<AuctionItem, String> {
        Ok(AuctionItem {
            category: self.category.ok_or("category is required")?,
            description: self.description.unwrap_or_default(),
            start_price: self.start_price.ok_or("start_price is required")?,
            buy_now_price: self.buy_now_price,
            quantity: self.quantity.unwrap_or(1),
            auction_duration: self.auction_duration.unwrap_or(7),
            end_time: self.end_time.unwrap_or(22),
            shipping_from: self.shipping_from.unwrap_or_else(|| "東京都".to_string()),
            shipping_payer: self.shipping_payer.unwrap_or_else(|| "落札者".to_string()),
            condition: self.condition.unwrap_or_else(|| "新品".to_string()),
            auto_extend: self.auto_extend,
            early_termination: self.early_termination,
            auto_relist: self.auto_relist,
            featured_category: self.featured_category.unwrap_or_default(),
            shipping_duration: self
                .shipping_duration
                .unwrap_or_else(|| "1～2日".to_string()),
            images: self.images,
        })
    }
}
