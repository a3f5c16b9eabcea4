//! Persisted domain state types.
//!
//! One module per collection, each defining the canonical persisted
//! shape (field names kept compatible with the browser-era JSON blobs)
//! and, where older builds stored an alternate shape, the one-time
//! migration used by the store's load path.

pub mod communities;
pub mod dreams;
pub mod events;
pub mod friends;
pub mod onboarding;
pub mod profile;
pub mod settings;

pub use communities::CommunityRef;
pub use dreams::{Dream, DreamDraft};
pub use events::{EventAttendees, LoopMember, UpcomingEvent};
pub use friends::Friend;
pub use onboarding::{OnboardingForm, OnboardingRecord};
pub use profile::{ProfilePatch, UserProfile};
pub use settings::AppSettings;
