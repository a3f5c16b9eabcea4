//! # VibeLoop Store
//!
//! Durable read/write of named collections as JSON blobs in a string
//! keyed store, replacing the browser-local storage of the original
//! client. Two backends ship: in-memory (tests, previews) and a single
//! JSON file on disk.
//!
//! The load path is deliberately infallible: a missing key yields the
//! collection's empty value, an undecodable value is cleared and logged
//! and also yields the empty value. A failed write is logged and
//! swallowed; in-memory state stays the source of truth for the rest of
//! the session. Screens must never crash on storage.

pub mod backend;
pub mod error;
pub mod keys;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use store::Store;
