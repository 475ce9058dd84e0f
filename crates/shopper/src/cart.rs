//! Cart line and summary types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use relicquest_core::{Product, ProductId};

/// A line item in the cart: a product plus a quantity.
///
/// Serializes as the product's fields merged with a `quantity` field.
/// This flattened shape is the stored-document contract for the `cart`
/// key; the wishlist stores bare products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line holds.
    #[serde(flatten)]
    pub product: Product,
    /// Units of the product. Always at least 1; a line whose quantity
    /// would drop to zero is removed instead.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Per-line display data for a cart summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineSummary {
    /// The product on the line.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Units on the line.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Unit price × quantity.
    pub line_total: Decimal,
}

impl From<&CartLine> for CartLineSummary {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            unit_price: line.product.price,
            line_total: line.line_total(),
        }
    }
}

/// Aggregated cart display data.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// One entry per cart line, in cart order.
    pub lines: Vec<CartLineSummary>,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Total units across all lines.
    pub total_quantity: u64,
    /// Sum of all line totals.
    pub subtotal: Decimal,
}

impl CartSummary {
    /// Summary of an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            line_count: 0,
            total_quantity: 0,
            subtotal: Decimal::ZERO,
        }
    }
}

impl From<&[CartLine]> for CartSummary {
    fn from(cart: &[CartLine]) -> Self {
        let lines: Vec<CartLineSummary> = cart.iter().map(CartLineSummary::from).collect();
        let line_count = lines.len();
        let total_quantity = lines.iter().map(|line| u64::from(line.quantity)).sum();
        let subtotal = lines.iter().map(|line| line.line_total).sum();

        Self {
            lines,
            line_count,
            total_quantity,
            subtotal,
        }
    }
}
