//! CLI command implementations.

use rust_decimal::Decimal;
use thiserror::Error;

use relicquest_shopper::{FileStore, ShopperState, StoreError};

use crate::config::CliConfig;

pub mod cart;
pub mod catalog;
pub mod wishlist;

/// Errors from shopper commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The product is not in the demo catalog.
    #[error("no catalog product with id '{0}'")]
    UnknownProduct(String),

    /// Reading or persisting shopper state failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Open the shopper state over the configured file store.
fn open_state() -> Result<ShopperState<FileStore>, CommandError> {
    let config = CliConfig::from_env();
    let store = FileStore::open(config.data_dir)?;
    Ok(ShopperState::load(store))
}

/// Format an amount as US dollars.
fn usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}
