//! Integration tests for RelicQuest.
//!
//! The tests exercise the shopper state manager over a real `FileStore`
//! in a temporary data directory, asserting on the stored JSON documents
//! themselves - the bit-exact boundary shared with any other consumer of
//! the persisted state.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart document shape, restart round-trips,
//!   corrupt-storage recovery, write-through behavior
//! - `wishlist_persistence` - Wishlist document shape, toggle behavior
//!   across restarts, last-writer-wins reconciliation

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use relicquest_core::{Product, ProductId};

/// Build a minimal fixed-price product for tests.
#[must_use]
pub fn product(id: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Test relic {id}"),
        price: Decimal::from(price),
        original_price: None,
        image: format!("https://img.example/{id}.jpg"),
        rating: 4.5,
        reviews: 12,
        discount: None,
        category: "Sports Cards".to_owned(),
        description: "A test relic.".to_owned(),
        current_bid: None,
        auction_end_time: None,
        is_auction: None,
        min_bid_increment: None,
        starting_bid: None,
        bid_history: None,
        seller: None,
        condition: None,
        specifications: None,
    }
}
