//! Built-in demo catalog.
//!
//! A handful of seeded listings so the CLI has products to shop with.
//! Identifiers are stable and referenced by the command examples; auction
//! close times are computed relative to the current run.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use relicquest_core::{Product, ProductId};

/// All demo catalog products, in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("mickey-mantle-1952"),
            name: "1952 Topps Mickey Mantle #311 PSA 8 NM-MT".to_owned(),
            price: Decimal::from(145_000),
            original_price: None,
            image: "https://img.relicquest.app/mickey-mantle-1952.jpg".to_owned(),
            rating: 4.9,
            reviews: 145,
            discount: None,
            category: "Sports Cards".to_owned(),
            description: "Iconic 1952 Topps rookie card with vivid coloring, \
                          sharp corners, and excellent centering."
                .to_owned(),
            current_bid: Some(Decimal::from(145_000)),
            auction_end_time: Some(Utc::now() + Duration::days(4)),
            is_auction: Some(true),
            min_bid_increment: Some(Decimal::from(2500)),
            starting_bid: Some(Decimal::from(95_000)),
            bid_history: None,
            seller: Some("VintageVault".to_owned()),
            condition: Some("PSA 8 NM-MT".to_owned()),
            specifications: Some(BTreeMap::from([
                ("year".to_owned(), "1952".to_owned()),
                ("manufacturer".to_owned(), "Topps".to_owned()),
                ("grade".to_owned(), "PSA 8".to_owned()),
            ])),
        },
        Product {
            id: ProductId::new("hank-aaron-1954"),
            name: "1954 Topps Hank Aaron #128 PSA 7 NM".to_owned(),
            price: Decimal::from(28_500),
            original_price: None,
            image: "https://img.relicquest.app/hank-aaron-1954.jpg".to_owned(),
            rating: 4.8,
            reviews: 62,
            discount: None,
            category: "Sports Cards".to_owned(),
            description: "Hank Aaron's only recognized rookie card, strong \
                          color and registration for the grade."
                .to_owned(),
            current_bid: Some(Decimal::from(27_000)),
            auction_end_time: Some(Utc::now() + Duration::days(2)),
            is_auction: Some(true),
            min_bid_increment: Some(Decimal::from(500)),
            starting_bid: Some(Decimal::from(18_000)),
            bid_history: None,
            seller: Some("DiamondArchive".to_owned()),
            condition: Some("PSA 7 NM".to_owned()),
            specifications: Some(BTreeMap::from([
                ("year".to_owned(), "1954".to_owned()),
                ("manufacturer".to_owned(), "Topps".to_owned()),
                ("grade".to_owned(), "PSA 7".to_owned()),
            ])),
        },
        Product {
            id: ProductId::new("babe-ruth-signed-ball"),
            name: "Babe Ruth Single-Signed Baseball (JSA)".to_owned(),
            price: Decimal::from(8500),
            original_price: Some(Decimal::from(10_000)),
            image: "https://img.relicquest.app/babe-ruth-signed-ball.jpg".to_owned(),
            rating: 4.7,
            reviews: 31,
            discount: Some(15),
            category: "Memorabilia".to_owned(),
            description: "Official American League baseball with a bold \
                          sweet-spot signature, JSA letter included."
                .to_owned(),
            current_bid: None,
            auction_end_time: None,
            is_auction: None,
            min_bid_increment: None,
            starting_bid: None,
            bid_history: None,
            seller: Some("LegendsAttic".to_owned()),
            condition: Some("Excellent".to_owned()),
            specifications: None,
        },
        Product {
            id: ProductId::new("jordan-fleer-1986"),
            name: "1986 Fleer Michael Jordan #57 BGS 8.5".to_owned(),
            price: Decimal::from(32_000),
            original_price: None,
            image: "https://img.relicquest.app/jordan-fleer-1986.jpg".to_owned(),
            rating: 4.9,
            reviews: 208,
            discount: None,
            category: "Sports Cards".to_owned(),
            description: "The definitive Jordan rookie, clean edges and a \
                          well-centered front."
                .to_owned(),
            current_bid: None,
            auction_end_time: None,
            is_auction: None,
            min_bid_increment: None,
            starting_bid: None,
            bid_history: None,
            seller: Some("VintageVault".to_owned()),
            condition: Some("BGS 8.5 NM-MT+".to_owned()),
            specifications: Some(BTreeMap::from([
                ("year".to_owned(), "1986".to_owned()),
                ("manufacturer".to_owned(), "Fleer".to_owned()),
                ("grade".to_owned(), "BGS 8.5".to_owned()),
            ])),
        },
    ]
}

/// Look up a catalog product by identifier.
#[must_use]
pub fn find(product_id: &ProductId) -> Option<Product> {
    products().into_iter().find(|p| p.id == *product_id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let all = products();
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find(&ProductId::new("mickey-mantle-1952")).is_some());
        assert!(find(&ProductId::new("missing")).is_none());
    }
}
