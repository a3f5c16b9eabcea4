//! Headless application core for the VibeLoop client.
//!
//! Everything a shell needs short of rendering: the persisted
//! collections and their operations behind [`core::AppCore`], the
//! change notification bus, screen view-models, session routing, and
//! the fixture catalogs. Shells stay thin; no screen talks to storage
//! directly.

pub mod bus;
pub mod config;
pub mod core;
pub mod error;
pub mod fixtures;
pub mod state;
pub mod views;
pub mod workflows;

pub use bus::{ChangeBus, Subscription, Topic};
pub use config::{AppConfig, StorageChoice};
pub use core::AppCore;
pub use error::AppError;
pub use workflows::{AuthStage, Screen, Session};
