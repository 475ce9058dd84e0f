//! RelicQuest Shopper - cart and wishlist state management.
//!
//! The state manager ([`ShopperState`]) holds the shopper's cart and
//! wishlist in memory and writes the affected collection through to a
//! [`StateStore`] after every mutation, so both collections survive
//! restarts the way a browser storage origin would.
//!
//! # Architecture
//!
//! - [`store`] - Persistent key/value store trait and its backends
//! - [`cart`] - Cart line and summary types
//! - [`state`] - The state manager and its operations
//! - [`error`] - Error types
//!
//! The manager is constructed explicitly over an injected store; there is
//! no ambient global state:
//!
//! ```rust
//! use relicquest_shopper::{MemoryStore, ShopperState};
//!
//! let mut shopper = ShopperState::load(MemoryStore::new());
//! assert!(shopper.cart().is_empty());
//! assert!(shopper.wishlist().is_empty());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod error;
pub mod state;
pub mod store;

pub use cart::{CartLine, CartLineSummary, CartSummary};
pub use error::StoreError;
pub use state::{CartMutation, ShopperState, WishlistMutation};
pub use store::{FileStore, MemoryStore, StateStore, keys};
