//! Storage error taxonomy.
//!
//! None of these reach a screen: decode failures recover to the empty
//! collection and write failures are swallowed after logging. The types
//! exist so backends and tests can observe what went wrong.

use thiserror::Error;

/// Errors raised inside the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted value present but not decodable as the expected shape.
    #[error("failed to decode value at key {key:?}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a value for persistence failed.
    #[error("failed to encode value for key {key:?}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing to the backing medium failed (quota, permissions, disk).
    #[error("failed to write key {key:?} to storage")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Opening or reading the backing medium failed.
    #[error("storage I/O failed")]
    Io(#[from] std::io::Error),
}
