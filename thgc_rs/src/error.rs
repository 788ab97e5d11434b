//! Error types for storage, submission and configuration.

use thiserror::Error;

/// Failures raised by a [`KeyValueStore`](crate::store::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached (no window, storage disabled, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write because it would exceed its quota.
    #[error("storage quota exceeded writing {bytes} bytes to '{key}'")]
    QuotaExceeded { key: String, bytes: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures surfaced by [`ContactDesk`](crate::desk::ContactDesk).
///
/// The desk itself never rejects an inquiry; every variant here originates in
/// the storage layer or in the stored payload.
#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The value under the storage key is not a JSON array of inquiries.
    #[error("stored inquiries under '{key}' are unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inquiries: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failures while parsing desk configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid desk config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type DeskResult<T> = Result<T, DeskError>;
