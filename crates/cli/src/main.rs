//! RelicQuest CLI - shopper state tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the demo catalog
//! relic-cli catalog list
//!
//! # Add a product to the cart and show the total
//! relic-cli cart add mickey-mantle-1952
//! relic-cli cart total
//!
//! # Toggle a wishlist entry
//! relic-cli wishlist toggle hank-aaron-1954
//! ```
//!
//! # Commands
//!
//! - `cart` - Add, remove, update quantities, list, total, clear
//! - `wishlist` - Add, remove, toggle, list, clear
//! - `catalog` - Browse the built-in demo catalog
//!
//! State persists as JSON documents under the data directory
//! (`RELICQUEST_DATA_DIR`, default `.relicquest`), so the cart and
//! wishlist survive between invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod catalog;
mod commands;
mod config;

#[derive(Parser)]
#[command(name = "relic-cli")]
#[command(author, version, about = "RelicQuest shopper tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Browse the demo catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a catalog product to the cart
    Add {
        /// Catalog product identifier
        product_id: String,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product identifier
        product_id: String,
    },
    /// Set the quantity for a product (0 or less removes it)
    Update {
        /// Catalog product identifier
        product_id: String,

        /// New quantity
        quantity: i64,
    },
    /// List cart lines with subtotals
    List,
    /// Show the cart total
    Total,
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a catalog product to the wishlist
    Add {
        /// Catalog product identifier
        product_id: String,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Catalog product identifier
        product_id: String,
    },
    /// Toggle a catalog product on the wishlist
    Toggle {
        /// Catalog product identifier
        product_id: String,
    },
    /// List wishlist entries
    List,
    /// Empty the wishlist
    Clear,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List catalog products
    List,
    /// Show one catalog product in detail
    Show {
        /// Catalog product identifier
        product_id: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { product_id } => commands::cart::add(&product_id)?,
            CartAction::Remove { product_id } => commands::cart::remove(&product_id)?,
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&product_id, quantity)?,
            CartAction::List => commands::cart::list()?,
            CartAction::Total => commands::cart::total()?,
            CartAction::Clear => commands::cart::clear()?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { product_id } => commands::wishlist::add(&product_id)?,
            WishlistAction::Remove { product_id } => commands::wishlist::remove(&product_id)?,
            WishlistAction::Toggle { product_id } => commands::wishlist::toggle(&product_id)?,
            WishlistAction::List => commands::wishlist::list()?,
            WishlistAction::Clear => commands::wishlist::clear()?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
            CatalogAction::Show { product_id } => commands::catalog::show(&product_id)?,
        },
    }
    Ok(())
}
