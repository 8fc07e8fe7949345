//! Error types shared across lunara-core.
//!
//! Failures roll up into [`CoreError`]: storage problems from the
//! key-value backends, validation problems from callers handing in bad
//! lengths or unknown entry ids.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for lunara-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Storage-specific errors.
///
/// Mutations that fail here leave the in-memory state already updated;
/// callers decide whether to retry the persist or keep working off the
/// cached view.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Reading a key failed
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed
    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Serializing a value for storage failed
    #[error("Failed to encode value for '{key}': {source}")]
    EncodeFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Cycle length outside the representable range
    #[error("Invalid cycle length: {value} (must be at least 1 day)")]
    InvalidCycleLength { value: i64 },

    /// Referenced log entry does not exist
    #[error("No log entry with id '{id}'")]
    EntryNotFound { id: String },
}

/// Result alias defaulting to [`CoreError`].
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
