//! Product and bid types for the marketplace.
//!
//! These types are read-only reference data from the shopper's perspective:
//! the catalog owns them, the cart and wishlist merely hold copies. The
//! state manager requires only `id` and `price`; everything else is display
//! metadata, optional wherever a listing may omit it.
//!
//! Fields serialize as camelCase. That spelling is the persistence contract
//! for stored cart/wishlist documents, so renames here are breaking changes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{BidId, ProductId, UserId};

/// A single bid in a product's auction history.
///
/// Carried only as immutable listing metadata; nothing in this workspace
/// places or validates bids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// Bid ID.
    pub id: BidId,
    /// Bidder's user ID.
    pub user_id: UserId,
    /// Bidder's display name.
    pub user_name: String,
    /// Bid amount.
    pub amount: Decimal,
    /// When the bid was placed.
    pub timestamp: DateTime<Utc>,
}

/// A product listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Decimal,
    /// Price before discount, for discounted listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Primary image URL.
    pub image: String,
    /// Average review rating.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: i64,
    /// Discount percentage, for discounted listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
    /// Category name.
    pub category: String,
    /// Plain text description.
    pub description: String,
    /// Highest bid so far (auction listings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_bid: Option<Decimal>,
    /// When the auction closes (auction listings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_end_time: Option<DateTime<Utc>>,
    /// Whether this listing is an auction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auction: Option<bool>,
    /// Minimum increment over the current bid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bid_increment: Option<Decimal>,
    /// Opening bid (auction listings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_bid: Option<Decimal>,
    /// Prior bids, oldest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_history: Option<Vec<Bid>>,
    /// Seller display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    /// Item condition (e.g. "PSA 8 NM-MT").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Free-form attribute map (year, manufacturer, grade, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
}
