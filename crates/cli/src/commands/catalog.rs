//! Catalog commands.

use tracing::info;

use relicquest_core::ProductId;

use super::{CommandError, usd};
use crate::catalog;

/// List catalog products.
pub fn list() -> Result<(), CommandError> {
    for product in catalog::products() {
        let kind = if product.is_auction == Some(true) {
            "auction"
        } else {
            "fixed price"
        };
        info!(
            "{} - {} ({}, {kind})",
            product.id,
            product.name,
            usd(product.price)
        );
    }
    Ok(())
}

/// Show one catalog product in detail.
pub fn show(product_id: &str) -> Result<(), CommandError> {
    let id = ProductId::new(product_id);
    let product =
        catalog::find(&id).ok_or_else(|| CommandError::UnknownProduct(product_id.to_owned()))?;

    info!("{}", product.name);
    info!("  Price: {}", usd(product.price));
    if let Some(original) = product.original_price {
        info!("  Original price: {}", usd(original));
    }
    if let Some(discount) = product.discount {
        info!("  Discount: {discount}%");
    }
    info!("  Category: {}", product.category);
    info!("  Rating: {} ({} reviews)", product.rating, product.reviews);
    if let Some(seller) = &product.seller {
        info!("  Seller: {seller}");
    }
    if let Some(condition) = &product.condition {
        info!("  Condition: {condition}");
    }
    if let Some(bid) = product.current_bid {
        info!("  Current bid: {}", usd(bid));
    }
    if let Some(end) = product.auction_end_time {
        info!("  Auction ends: {end}");
    }
    info!("  {}", product.description);
    Ok(())
}
