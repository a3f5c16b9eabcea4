//! Application error types.
//!
//! Storage problems never surface here; the store recovers them
//! internally. What remains is user-correctable form validation and
//! the fallible setup path (opening a storage file).

use thiserror::Error;
use vibeloop_store::StoreError;

/// Errors surfaced by the application core.
#[derive(Debug, Error)]
pub enum AppError {
    /// A form field failed validation; shown inline, never fatal.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// Setting up the persistence layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn validation(field: &'static str, message: &'static str) -> Self {
        Self::Validation { field, message }
    }
}
