//! # VibeLoop Core
//!
//! Shared domain types for the VibeLoop client core: stable identifiers
//! for authors, dreams, and joinable communities, and the fixed mood
//! catalog used to classify dreams, loops, and events.
//!
//! This crate is a leaf: no storage, no notification, no view logic.

pub mod identifiers;
pub mod moods;

pub use identifiers::{Author, AuthorId, CommunityId, CommunityKind, DreamId, ParseCommunityIdError};
pub use moods::{mood_color, mood_emoji, Mood, FALLBACK_COLOR, FALLBACK_EMOJI, MOODS};
