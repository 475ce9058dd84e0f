//! Cart commands.
//!
//! Each command loads the shopper state from the file store, applies one
//! operation, and reports the outcome. A persistence failure aborts the
//! command with a nonzero exit, but the message makes clear the change
//! was applied in memory only.

use tracing::info;

use relicquest_core::ProductId;
use relicquest_shopper::CartMutation;

use super::{CommandError, open_state, usd};
use crate::catalog;

/// Add one unit of a catalog product to the cart.
pub fn add(product_id: &str) -> Result<(), CommandError> {
    let id = ProductId::new(product_id);
    let product =
        catalog::find(&id).ok_or_else(|| CommandError::UnknownProduct(product_id.to_owned()))?;
    let name = product.name.clone();

    let mut shopper = open_state()?;
    match shopper.add_to_cart(product)? {
        CartMutation::Incremented => info!("Already in cart, quantity incremented: {name}"),
        _ => info!("Added to cart: {name}"),
    }
    info!("Cart total: {}", usd(shopper.cart_total()));
    Ok(())
}

/// Remove a product from the cart.
pub fn remove(product_id: &str) -> Result<(), CommandError> {
    let id = ProductId::new(product_id);

    let mut shopper = open_state()?;
    match shopper.remove_from_cart(&id)? {
        CartMutation::Removed => info!("Removed from cart: {id}"),
        _ => info!("Not in cart: {id}"),
    }
    Ok(())
}

/// Set the quantity for a product already in the cart.
pub fn update(product_id: &str, quantity: i64) -> Result<(), CommandError> {
    let id = ProductId::new(product_id);

    let mut shopper = open_state()?;
    match shopper.update_quantity(&id, quantity)? {
        CartMutation::Updated => info!("Quantity set to {quantity}: {id}"),
        CartMutation::Removed => info!("Removed from cart (non-positive quantity): {id}"),
        _ => info!("Not in cart: {id}"),
    }
    Ok(())
}

/// List cart lines with subtotals.
pub fn list() -> Result<(), CommandError> {
    let shopper = open_state()?;
    let summary = shopper.cart_summary();

    if summary.lines.is_empty() {
        info!("Cart is empty");
        return Ok(());
    }

    for line in &summary.lines {
        info!(
            "{} x{} @ {} = {}",
            line.name,
            line.quantity,
            usd(line.unit_price),
            usd(line.line_total)
        );
    }
    info!(
        "{} line(s), {} item(s), subtotal {}",
        summary.line_count,
        summary.total_quantity,
        usd(summary.subtotal)
    );
    Ok(())
}

/// Show the cart total.
pub fn total() -> Result<(), CommandError> {
    let shopper = open_state()?;
    info!("Cart total: {}", usd(shopper.cart_total()));
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CommandError> {
    let mut shopper = open_state()?;
    shopper.clear_cart()?;
    info!("Cart cleared");
    Ok(())
}
