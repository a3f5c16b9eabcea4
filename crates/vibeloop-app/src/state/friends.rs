//! Constellation friends.
//!
//! User-specific data: the collection defaults to empty for new users
//! so demo people are never treated as the current user's friends.

use serde::{Deserialize, Serialize};
use vibeloop_core::AuthorId;

/// One star in the constellation, persisted under
/// `vibeloop_constellation_friends`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: u32,
    pub author_id: AuthorId,
    pub name: String,
    pub current_mood: String,
    pub mood_color: String,
    /// Position as percentage of the canvas.
    pub x: f32,
    pub y: f32,
    /// Star size.
    pub size: f32,
    pub recent_vibes: Vec<String>,
    /// Ids of friends this star is drawn connected to.
    pub connected_to: Vec<u32>,
    pub last_active: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_with_browser_era_field_names() {
        let friend = Friend {
            id: 1,
            author_id: AuthorId::from_handle("aria"),
            name: "Aria".into(),
            current_mood: "Dreamy".into(),
            mood_color: "#C5A9FF".into(),
            x: 20.0,
            y: 35.0,
            size: 1.2,
            recent_vibes: vec!["floating through the week".into()],
            connected_to: vec![2, 3],
            last_active: "2h ago".into(),
        };
        let json = serde_json::to_value(&friend).unwrap();
        assert!(json.get("currentMood").is_some());
        assert!(json.get("connectedTo").is_some());
        let back: Friend = serde_json::from_value(json).unwrap();
        assert_eq!(back, friend);
    }
}
