//! Row mapping from listing records to CSV rows
//!
//! Mapping happens in two steps. First a column → value map is built from the
//! record, the fixed business settings and the image position. That map is
//! then projected onto the header list, so reordering or extending the
//! header list never touches the mapping code.
//!
//! # Example
//!
//! ```
//! use lotpack::core::mapper::RowMapper;
//! use lotpack::core::title::TitleGenerator;
//! use lotpack::domain::AuctionItemBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mapper = RowMapper::with_headers(["カテゴリ", "タイトル", "説明"], TitleGenerator::default());
//! let item = AuctionItemBuilder::new()
//!     .category("Books")
//!     .description("<b>Hi</b>")
//!     .start_price(500)
//!     .image("Cover (1)", "https://img.example.com/cover.jpg")
//!     .build()?;
//!
//! let rows = mapper.map_item(&item);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0][0], "Books");
//! assert_eq!(rows[0][2], "Hi");
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod headers;

use crate::core::text::{strip_markup, truncate_chars};
use crate::core::title::TitleGenerator;
use crate::domain::AuctionItem;
use constants::{yes_no, BUSINESS_CONSTANTS};
use headers::AUCTION_HEADERS;
use std::collections::HashMap;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_CHARS: usize = 25_000;

/// Value placed in the first image slot column when the row carries an image
const IMAGE_SLOT_OCCUPIED: &str = "1";

/// One CSV line worth of raw, unescaped cells
pub type Row = Vec<String>;

/// Column → cell value for one (item, image) pair
pub type FieldValues = HashMap<&'static str, String>;

/// Maps listing records onto a fixed header layout
#[derive(Debug, Clone)]
pub struct RowMapper {
    headers: Vec<String>,
    titles: TitleGenerator,
}

impl RowMapper {
    /// Creates a mapper over the default Yahoo! Auctions header list
    pub fn new(titles: TitleGenerator) -> Self {
        Self::with_headers(AUCTION_HEADERS.iter().copied(), titles)
    }

    /// Creates a mapper over a custom header list
    pub fn with_headers<I, S>(headers: I, titles: TitleGenerator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            titles,
        }
    }

    /// The header list rows are projected onto
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Produces one row per image; items without images produce none
    pub fn map_item(&self, item: &AuctionItem) -> Vec<Row> {
        (0..item.images.len())
            .filter_map(|index| self.map_image(item, index))
            .collect()
    }

    /// Produces the row for the image at `image_index`, or `None` if the
    /// item has no such image
    pub fn map_image(&self, item: &AuctionItem, image_index: usize) -> Option<Row> {
        let values = self.field_values(item, image_index)?;
        Some(self.project(&values))
    }

    /// Builds the column → value map for one image of the item
    pub fn field_values(&self, item: &AuctionItem, image_index: usize) -> Option<FieldValues> {
        let image = item.images.get(image_index)?;
        let base_name = image.base_name();
        let title = self.titles.generate(base_name, image_index);
        let description = strip_markup(&item.description);

        let mut values: FieldValues = BUSINESS_CONSTANTS
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect();

        let record_fields: [(&'static str, String); 18] = [
            ("カテゴリ", item.category.clone()),
            ("タイトル", title),
            (
                "説明",
                truncate_chars(&description, MAX_DESCRIPTION_CHARS).to_string(),
            ),
            ("開始価格", item.start_price.to_string()),
            (
                "即決価格",
                item.buy_now_price.map(|p| p.to_string()).unwrap_or_default(),
            ),
            ("個数", item.quantity.to_string()),
            ("開催期間", item.auction_duration.to_string()),
            ("終了時間", item.end_time.to_string()),
            ("画像1", IMAGE_SLOT_OCCUPIED.to_string()),
            ("画像1コメント", base_name.to_string()),
            ("商品発送元の都道府県", item.shipping_from.clone()),
            ("送料負担", item.shipping_payer.clone()),
            ("商品の状態", item.condition.clone()),
            ("自動延長", yes_no(item.auto_extend).to_string()),
            ("早期終了", yes_no(item.early_termination).to_string()),
            ("自動再出品", item.auto_relist.to_string()),
            ("注目のオークション", item.featured_category.clone()),
            ("発送までの日数", item.shipping_duration.clone()),
        ];
        values.extend(record_fields);

        Some(values)
    }

    /// Places each mapped value under its header; unmapped headers stay empty
    fn project(&self, values: &FieldValues) -> Row {
        self.headers
            .iter()
            .map(|header| values.get(header.as_str()).cloned().unwrap_or_default())
            .collect()
    }
}

impl Default for RowMapper {
    fn default() -> Self {
        Self::new(TitleGenerator::default())
    }
}
