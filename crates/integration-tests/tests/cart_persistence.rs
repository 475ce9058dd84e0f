//! Integration tests for cart persistence over the file store.
//!
//! Every test gets its own temporary data directory, standing in for one
//! browser storage origin.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::fs;

use serde_json::Value;

use relicquest_core::ProductId;
use relicquest_integration_tests::product;
use relicquest_shopper::{FileStore, ShopperState, StateStore, keys};

fn open(dir: &std::path::Path) -> ShopperState<FileStore> {
    ShopperState::load(FileStore::open(dir).unwrap())
}

// ============================================================================
// Stored Document Contract
// ============================================================================

#[test]
fn test_stored_cart_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut shopper = open(dir.path());

    shopper.add_to_cart(product("mantle-52", 145_000)).unwrap();

    let raw = fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();

    let lines = json.as_array().unwrap();
    assert_eq!(lines.len(), 1);

    // Product fields merged with a quantity field, camelCase, numeric price
    assert_eq!(lines[0]["id"], "mantle-52");
    assert_eq!(lines[0]["price"], 145_000.0);
    assert_eq!(lines[0]["quantity"], 1);
    assert!(lines[0].get("product").is_none());
    assert!(lines[0].get("originalPrice").is_none());
}

#[test]
fn test_cart_round_trip_across_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut shopper = open(dir.path());
        shopper.add_to_cart(product("p1", 10)).unwrap();
        shopper.add_to_cart(product("p1", 10)).unwrap();
        shopper.add_to_cart(product("p2", 5)).unwrap();
    }

    // A fresh manager over the same directory sees the persisted cart
    let shopper = open(dir.path());
    assert_eq!(shopper.cart().len(), 2);
    assert_eq!(shopper.cart()[0].quantity, 2);
    assert_eq!(shopper.cart()[1].quantity, 1);
    assert_eq!(shopper.cart_total(), rust_decimal::Decimal::from(25));
}

#[test]
fn test_every_mutation_overwrites_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let mut shopper = open(dir.path());
    let path = dir.path().join("cart.json");

    shopper.add_to_cart(product("p1", 10)).unwrap();
    let after_add: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(after_add[0]["quantity"], 1);

    shopper.update_quantity(&ProductId::new("p1"), 4).unwrap();
    let after_update: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(after_update[0]["quantity"], 4);

    shopper.remove_from_cart(&ProductId::new("p1")).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

// ============================================================================
// Corrupt Storage Recovery
// ============================================================================

#[test]
fn test_corrupt_cart_document_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cart.json"), "{definitely not json").unwrap();

    let shopper = open(dir.path());
    assert!(shopper.cart().is_empty());
}

#[test]
fn test_first_write_replaces_corrupt_document() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cart.json"), "][").unwrap();

    let mut shopper = open(dir.path());
    shopper.add_to_cart(product("p1", 10)).unwrap();

    // The corrupt document is gone; the store holds valid state again
    let reopened = open(dir.path());
    assert_eq!(reopened.cart().len(), 1);
}

#[test]
fn test_corrupt_cart_leaves_wishlist_intact() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut shopper = open(dir.path());
        shopper.add_to_wishlist(product("p1", 10)).unwrap();
    }
    fs::write(dir.path().join("cart.json"), "not even close").unwrap();

    let shopper = open(dir.path());
    assert!(shopper.cart().is_empty());
    assert_eq!(shopper.wishlist_count(), 1);
}

// ============================================================================
// Shared-Store Behavior
// ============================================================================

#[test]
fn test_two_managers_are_last_writer_wins() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = open(dir.path());
    let mut second = open(dir.path());

    first.add_to_cart(product("p1", 10)).unwrap();
    // `second` loaded before `first`'s write; its next mutation clobbers it
    second.add_to_cart(product("p2", 20)).unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    let raw = store.read(keys::CART).unwrap().unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], "p2");

    // `first` still holds its stale copy until it reconciles
    assert_eq!(first.cart()[0].product.id, ProductId::new("p1"));
    first.reload();
    assert_eq!(first.cart().len(), 1);
    assert_eq!(first.cart()[0].product.id, ProductId::new("p2"));
}
