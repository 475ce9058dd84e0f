//! The shopper state manager.
//!
//! [`ShopperState`] holds the cart and wishlist in memory and writes the
//! affected collection through to the store after every mutation - one
//! synchronous write per call, no batching, no debounce. Both collections
//! are keyed by product ID and preserve insertion order for stable display.

use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use relicquest_core::{Product, ProductId};

use crate::cart::{CartLine, CartSummary};
use crate::error::StoreError;
use crate::store::{StateStore, keys};

/// Outcome of a cart mutation.
///
/// No-op cases are named rather than silent so consumers and tests can
/// observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartMutation {
    /// A new line was appended with quantity 1.
    Inserted,
    /// An existing line's quantity went up by 1.
    Incremented,
    /// An existing line's quantity was replaced.
    Updated,
    /// The line was removed.
    Removed,
    /// No line matched the product; the cart is unchanged.
    NotFound,
}

/// Outcome of a wishlist mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistMutation {
    /// The product was saved.
    Added,
    /// The product was already saved; the wishlist is unchanged.
    AlreadyPresent,
    /// The product was removed.
    Removed,
    /// No entry matched the product; the wishlist is unchanged.
    NotFound,
}

/// In-memory cart/wishlist state, written through to a [`StateStore`].
///
/// # Persistence
///
/// Every mutating operation re-serializes the affected collection and
/// overwrites its store key, even when the mutation was a no-op. A failed
/// write is logged and returned while the in-memory change is kept, so an
/// `Err` from a mutation means "applied in memory, not persisted".
///
/// # Shared stores
///
/// Two managers over one store location do not observe each other's
/// writes; the last writer wins. [`reload`](Self::reload) replaces the
/// in-memory collections with whatever the store currently holds.
pub struct ShopperState<S> {
    store: S,
    cart: Vec<CartLine>,
    wishlist: Vec<Product>,
}

impl<S: StateStore> ShopperState<S> {
    /// Load state from the store.
    ///
    /// A missing key yields an empty collection. A value that cannot be
    /// read or parsed is logged at WARN and discarded - construction
    /// never fails and never produces partial state.
    pub fn load(store: S) -> Self {
        let cart = read_collection(&store, keys::CART);
        let wishlist = read_collection(&store, keys::WISHLIST);

        Self {
            store,
            cart,
            wishlist,
        }
    }

    /// Replace the in-memory collections with the store's current contents.
    ///
    /// This is the reconciliation primitive for shared stores: after an
    /// external writer wins, `reload` converges this manager on the stored
    /// state. Corrupt values fall back to empty, as in [`load`](Self::load).
    pub fn reload(&mut self) {
        self.cart = read_collection(&self.store, keys::CART);
        self.wishlist = read_collection(&self.store, keys::WISHLIST);
    }

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Current wishlist entries, in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    /// Number of saved wishlist entries.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// Borrow the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the manager, returning the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add one unit of `product` to the cart.
    ///
    /// Increments the quantity if a line for the product already exists
    /// (leaving every other line field unchanged); otherwise appends a new
    /// line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the cart fails; the in-memory
    /// cart keeps the change.
    pub fn add_to_cart(&mut self, product: Product) -> Result<CartMutation, StoreError> {
        let outcome = match self
            .cart
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                CartMutation::Incremented
            }
            None => {
                self.cart.push(CartLine {
                    product,
                    quantity: 1,
                });
                CartMutation::Inserted
            }
        };

        self.persist_cart()?;
        Ok(outcome)
    }

    /// Remove the line for `product_id`, if present.
    ///
    /// Removing an absent product is a [`CartMutation::NotFound`] no-op,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the cart fails.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<CartMutation, StoreError> {
        let before = self.cart.len();
        self.cart.retain(|line| line.product.id != *product_id);

        let outcome = if self.cart.len() < before {
            CartMutation::Removed
        } else {
            CartMutation::NotFound
        };

        self.persist_cart()?;
        Ok(outcome)
    }

    /// Replace the quantity on the line for `product_id`.
    ///
    /// A quantity of zero or less is removal intent and delegates to
    /// [`remove_from_cart`](Self::remove_from_cart).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the cart fails.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<CartMutation, StoreError> {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let outcome = match self
            .cart
            .iter_mut()
            .find(|line| line.product.id == *product_id)
        {
            Some(line) => {
                line.quantity = quantity;
                CartMutation::Updated
            }
            None => CartMutation::NotFound,
        };

        self.persist_cart()?;
        Ok(outcome)
    }

    /// Sum of unit price × quantity over all cart lines. Pure read.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    /// Aggregated display data for the cart. Pure read.
    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        CartSummary::from(self.cart.as_slice())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the cart fails.
    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.persist_cart()
    }

    // =========================================================================
    // Wishlist operations
    // =========================================================================

    /// Save `product` to the wishlist.
    ///
    /// Idempotent: a product that is already saved is left untouched and
    /// reported as [`WishlistMutation::AlreadyPresent`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the wishlist fails.
    pub fn add_to_wishlist(&mut self, product: Product) -> Result<WishlistMutation, StoreError> {
        let outcome = if self.is_in_wishlist(&product.id) {
            WishlistMutation::AlreadyPresent
        } else {
            self.wishlist.push(product);
            WishlistMutation::Added
        };

        self.persist_wishlist()?;
        Ok(outcome)
    }

    /// Remove the entry for `product_id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the wishlist fails.
    pub fn remove_from_wishlist(
        &mut self,
        product_id: &ProductId,
    ) -> Result<WishlistMutation, StoreError> {
        let before = self.wishlist.len();
        self.wishlist.retain(|product| product.id != *product_id);

        let outcome = if self.wishlist.len() < before {
            WishlistMutation::Removed
        } else {
            WishlistMutation::NotFound
        };

        self.persist_wishlist()?;
        Ok(outcome)
    }

    /// Whether `product_id` is saved to the wishlist. Pure read.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.wishlist.iter().any(|product| product.id == *product_id)
    }

    /// Remove `product` from the wishlist if saved, save it otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the wishlist fails.
    pub fn toggle_wishlist(&mut self, product: Product) -> Result<WishlistMutation, StoreError> {
        if self.is_in_wishlist(&product.id) {
            self.remove_from_wishlist(&product.id)
        } else {
            self.add_to_wishlist(product)
        }
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the wishlist fails.
    pub fn clear_wishlist(&mut self) -> Result<(), StoreError> {
        self.wishlist.clear();
        self.persist_wishlist()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&mut self) -> Result<(), StoreError> {
        persist(&mut self.store, keys::CART, &self.cart)
    }

    fn persist_wishlist(&mut self) -> Result<(), StoreError> {
        persist(&mut self.store, keys::WISHLIST, &self.wishlist)
    }
}

/// Read and decode a stored collection, falling back to empty.
fn read_collection<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: StateStore,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read stored state, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(key, error = %e, "stored state is corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Serialize and write one collection, logging failures before returning
/// them.
fn persist<T, S>(store: &mut S, key: &str, values: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: StateStore,
{
    let encoded = serde_json::to_string(values).map_err(|source| StoreError::Encode {
        key: key.to_owned(),
        source,
    })?;

    if let Err(e) = store.write(key, &encoded) {
        warn!(key, error = %e, "failed to persist state, in-memory change kept");
        return Err(e);
    }
    Ok(())
}
