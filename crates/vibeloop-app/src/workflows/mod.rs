//! Cross-screen flows.

pub mod session;

pub use session::{AuthStage, Screen, Session};
