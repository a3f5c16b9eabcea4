//! Core application types.
//!
//! [`AppCore`] is the single injected store object every screen talks
//! to; no screen opens a storage key on its own.

mod app;

pub use app::AppCore;
