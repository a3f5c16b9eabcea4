//! The persisted storage key table.
//!
//! Every collection the client persists lives under one of these keys,
//! each holding a JSON-serialized value. `ALL` drives the full reset:
//! removing every entry restores fresh-install behavior.

/// Onboarding record: `{hasOnboarded, userName, ageRange, seekingFor, expressionStyle, initialMood}`.
pub const ONBOARDED: &str = "vibeloop_onboarded";
/// Profile record: `{name, username?, bio}`.
pub const PROFILE: &str = "vibeloop_profile";
/// Avatar image as a data-URI string.
pub const PROFILE_AVATAR: &str = "vibeloop_profile_avatar";
/// App settings: six preference fields.
pub const SETTINGS: &str = "vibeloop_settings";
/// Followed author ids.
pub const FOLLOWING: &str = "vibeloop_following";
/// Joined loops/events: array of `{id, name, color}` records.
pub const JOINED_LOOPS: &str = "vibeloop_joined_loops";
/// Saved dream ids.
pub const SAVED_DREAMS: &str = "vibeloop_saved_dreams";
/// Full dream records authored on this device.
pub const DREAMS: &str = "vibeloop_dreams";
/// Constellation friend records.
pub const CONSTELLATION_FRIENDS: &str = "vibeloop_constellation_friends";
/// Recently seen loop members.
pub const RECENT_MEMBERS: &str = "vibeloop_recent_members";
/// User-specific upcoming events.
pub const UPCOMING_EVENTS: &str = "vibeloop_upcoming_events";
/// Attendee lists per event.
pub const EVENT_ATTENDEES: &str = "vibeloop_event_attendees";
/// Event ids the user RSVPed to.
pub const RSVPED_EVENTS: &str = "vibeloop_rsvped_events";
/// Stable id of the local author, minted on first use.
pub const AUTHOR_ID: &str = "vibeloop_author_id";
/// Debug toggle, "true"/"false".
pub const DEBUG: &str = "vibeloop_debug";
/// Legacy account blob from early builds; only ever removed.
pub const LEGACY_USER: &str = "vibeloop_user";

/// Every key the client knows about, in no particular order.
pub const ALL: &[&str] = &[
    ONBOARDED,
    PROFILE,
    PROFILE_AVATAR,
    SETTINGS,
    FOLLOWING,
    JOINED_LOOPS,
    SAVED_DREAMS,
    DREAMS,
    CONSTELLATION_FRIENDS,
    RECENT_MEMBERS,
    UPCOMING_EVENTS,
    EVENT_ATTENDEES,
    RSVPED_EVENTS,
    AUTHOR_ID,
    DEBUG,
    LEGACY_USER,
];
