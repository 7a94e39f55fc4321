//! Store Errors
//!
//! The only fallible primitive in the core is the durable write.

use thiserror::Error;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while writing the durable payload
#[derive(Debug, Error)]
pub enum StoreError {
    /// The medium rejected the write (e.g. quota exceeded)
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    /// The collection could not be encoded
    #[error("failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}
