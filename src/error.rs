//! Error types for shelfdb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for shelfdb operations
#[derive(Debug, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// An underlying read/write/stat/truncate failed. The context string
    /// names the storage operation that was in flight; the source error is
    /// propagated verbatim.
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Malformed Input
    // -------------------------------------------------------------------------
    #[error("slice length exceeded item size")]
    SliceExceedsItemSize,

    #[error("invalid slice size")]
    InvalidSliceSize,

    #[error("invalid key id size")]
    InvalidKeyIdSize,

    // -------------------------------------------------------------------------
    // Absence
    // -------------------------------------------------------------------------
    #[error("item not found")]
    ItemNotFound,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Wrap an I/O error with a short description of the failed operation.
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }
}
