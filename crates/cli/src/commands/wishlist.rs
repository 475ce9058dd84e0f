//! Wishlist commands.

use tracing::info;

use relicquest_core::ProductId;
use relicquest_shopper::WishlistMutation;

use super::{CommandError, open_state, usd};
use crate::catalog;

/// Save a catalog product to the wishlist.
pub fn add(product_id: &str) -> Result<(), CommandError> {
    let id = ProductId::new(product_id);
    let product =
        catalog::find(&id).ok_or_else(|| CommandError::UnknownProduct(product_id.to_owned()))?;
    let name = product.name.clone();

    let mut shopper = open_state()?;
    match shopper.add_to_wishlist(product)? {
        WishlistMutation::AlreadyPresent => info!("Already on the wishlist: {name}"),
        _ => info!("Saved to wishlist: {name}"),
    }
    Ok(())
}

/// Remove a product from the wishlist.
pub fn remove(product_id: &str) -> Result<(), CommandError> {
    let id = ProductId::new(product_id);

    let mut shopper = open_state()?;
    match shopper.remove_from_wishlist(&id)? {
        WishlistMutation::Removed => info!("Removed from wishlist: {id}"),
        _ => info!("Not on the wishlist: {id}"),
    }
    Ok(())
}

/// Toggle a catalog product on the wishlist.
pub fn toggle(product_id: &str) -> Result<(), CommandError> {
    let id = ProductId::new(product_id);
    let product =
        catalog::find(&id).ok_or_else(|| CommandError::UnknownProduct(product_id.to_owned()))?;
    let name = product.name.clone();

    let mut shopper = open_state()?;
    match shopper.toggle_wishlist(product)? {
        WishlistMutation::Removed => info!("Removed from wishlist: {name}"),
        _ => info!("Saved to wishlist: {name}"),
    }
    Ok(())
}

/// List wishlist entries.
pub fn list() -> Result<(), CommandError> {
    let shopper = open_state()?;

    if shopper.wishlist().is_empty() {
        info!("Wishlist is empty");
        return Ok(());
    }

    for product in shopper.wishlist() {
        info!("{} - {} ({})", product.id, product.name, usd(product.price));
    }
    info!("{} entr(ies) saved", shopper.wishlist_count());
    Ok(())
}

/// Empty the wishlist.
pub fn clear() -> Result<(), CommandError> {
    let mut shopper = open_state()?;
    shopper.clear_wishlist()?;
    info!("Wishlist cleared");
    Ok(())
}
