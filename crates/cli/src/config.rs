//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `RELICQUEST_DATA_DIR` - Directory for persisted shopper state
//!   (default: `.relicquest`)

use std::path::PathBuf;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".relicquest";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the persisted shopper state.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("RELICQUEST_DATA_DIR")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        Self { data_dir }
    }
}
