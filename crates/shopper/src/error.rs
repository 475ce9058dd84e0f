//! Error types for shopper state persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing persisted shopper state.
///
/// Mutating operations apply to the in-memory collections before
/// persisting, so an error from one of them means the change is live in
/// memory but was not written to the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage access failed for key '{key}': {source}")]
    Io {
        /// The store key being accessed.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The store's data directory could not be created.
    #[error("failed to create store directory {}: {source}", .path.display())]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Encoding a collection for storage failed.
    #[error("failed to encode '{key}' for storage: {source}")]
    Encode {
        /// The store key being written.
        key: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
