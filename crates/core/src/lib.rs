//! RelicQuest Core - Shared types library.
//!
//! This crate provides common types used across all RelicQuest components:
//! - `shopper` - Cart/wishlist state manager and its persistence layer
//! - `cli` - Command-line tools for shopping against the demo catalog
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! The serde representation of these types is load-bearing: camelCase field
//! names and numeric prices are the stored-document contract shared with
//! every other consumer of the persisted shopper state.
//!
//! # Modules
//!
//! - [`types`] - Product and bid data, plus newtype wrappers for type-safe IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
