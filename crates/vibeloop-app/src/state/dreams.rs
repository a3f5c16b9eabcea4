//! Dream records and the saved-dreams set.
//!
//! Dreams authored on this device persist as full records under
//! `vibeloop_dreams`; the saved set under `vibeloop_saved_dreams` holds
//! only ids. Earlier builds kept dream content in session memory and
//! persisted ids alone, which left dangling saved ids after a reload;
//! the load path now prunes any saved id without a backing record.

use serde::{Deserialize, Serialize};
use vibeloop_core::{mood_color, AuthorId, DreamId};

/// A mood-tagged post authored via the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dream {
    pub id: DreamId,
    pub mood: String,
    pub mood_color: String,
    pub text: String,
    /// Human-readable age shown in the feed ("Just now" at creation).
    pub timestamp: String,
    pub dream_orb: bool,
    pub author_id: AuthorId,
    pub author: String,
    pub author_username: String,
    pub author_color: String,
    pub is_following: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Composer input before a dream is stamped with id and author.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DreamDraft {
    pub mood: String,
    pub text: String,
    pub image: Option<String>,
}

impl DreamDraft {
    /// Stamp the draft into a dream record for the local author.
    pub fn into_dream(self, id: DreamId, author_id: AuthorId, author_name: &str) -> Dream {
        let color = mood_color(&self.mood).to_string();
        Dream {
            id,
            mood: self.mood,
            mood_color: color.clone(),
            text: self.text,
            timestamp: "Just now".to_string(),
            dream_orb: true,
            author_id,
            author: author_name.to_string(),
            author_username: "you".to_string(),
            author_color: color,
            is_following: true,
            image: self.image,
        }
    }
}

/// Migrate the legacy saved-dreams shape: an array of `{id}` records.
pub fn migrate_saved(value: &serde_json::Value) -> Option<Vec<DreamId>> {
    let entries = value.as_array()?;
    entries
        .iter()
        .map(|entry| entry.get("id").and_then(|id| id.as_i64()).map(DreamId))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_stamps_mood_color_and_author() {
        let draft = DreamDraft {
            mood: "Calm".into(),
            text: "floating".into(),
            image: None,
        };
        let dream = draft.into_dream(DreamId(17), AuthorId::from_handle("me"), "Sam");
        assert_eq!(dream.mood_color, "#A9C7FF");
        assert_eq!(dream.author_color, "#A9C7FF");
        assert_eq!(dream.author, "Sam");
        assert_eq!(dream.author_username, "you");
        assert_eq!(dream.timestamp, "Just now");
        assert!(dream.dream_orb && dream.is_following);
    }

    #[test]
    fn legacy_saved_records_migrate_to_ids() {
        let value: serde_json::Value = serde_json::from_str(r#"[{"id":3},{"id":7}]"#).unwrap();
        assert_eq!(migrate_saved(&value), Some(vec![DreamId(3), DreamId(7)]));
    }

    #[test]
    fn saved_migration_rejects_idless_records() {
        let value: serde_json::Value = serde_json::from_str(r#"[{"id":3},{}]"#).unwrap();
        assert_eq!(migrate_saved(&value), None);
    }
}
