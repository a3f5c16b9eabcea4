//! Auxiliary loop/event collections.
//!
//! Recent members, user-specific upcoming events, and per-event
//! attendee lists. All default to empty for new users; the RSVP set
//! itself is a plain list of event ids.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vibeloop_core::{AuthorId, CommunityId};

/// A recently seen loop member, persisted under `vibeloop_recent_members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopMember {
    pub id: AuthorId,
    pub name: String,
    pub color: String,
    pub last_seen: String,
}

/// A user-specific upcoming event, persisted under
/// `vibeloop_upcoming_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingEvent {
    pub id: CommunityId,
    pub name: String,
    pub date: String,
    pub attendees: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
}

/// Attendee names per event, persisted under `vibeloop_event_attendees`.
pub type EventAttendees = BTreeMap<CommunityId, Vec<String>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendee_map_keys_serialize_as_namespaced_strings() {
        let mut attendees = EventAttendees::new();
        attendees.insert(CommunityId::event_id(3), vec!["Mei Wong".to_string()]);
        let json = serde_json::to_string(&attendees).unwrap();
        assert_eq!(json, r#"{"event:3":["Mei Wong"]}"#);
        let back: EventAttendees = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attendees);
    }
}
