//! The fixed mood catalog.
//!
//! Moods classify dreams, loops, and events. The catalog is static and
//! ordered; lookups by name fall back to the calm blue / sparkle pair
//! so an unknown mood never breaks rendering.

use serde::{Deserialize, Serialize};

/// Color used when a mood name is not in the catalog.
pub const FALLBACK_COLOR: &str = "#A9C7FF";
/// Emoji used when a mood name is not in the catalog.
pub const FALLBACK_EMOJI: &str = "✨";

/// One entry of the mood catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub name: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

impl Mood {
    /// Lowercase identifier form of the mood name.
    pub fn id(&self) -> String {
        self.name.to_lowercase()
    }

    /// Look up a mood by its display name.
    pub fn by_name(name: &str) -> Option<&'static Mood> {
        MOODS.iter().find(|m| m.name == name)
    }

    /// Look up a mood by its lowercase id.
    pub fn by_id(id: &str) -> Option<&'static Mood> {
        MOODS.iter().find(|m| m.id() == id)
    }
}

/// The full catalog, in display order.
pub const MOODS: [Mood; 15] = [
    Mood { name: "Calm", color: "#A9C7FF", emoji: "🌊", description: "Soft and centered" },
    Mood { name: "Dreamy", color: "#C5A9FF", emoji: "✨", description: "Lost in thought and wonder" },
    Mood { name: "Reflective", color: "#E0C9D9", emoji: "🌙", description: "Looking inward quietly" },
    Mood { name: "Hopeful", color: "#FFD4A9", emoji: "🌅", description: "Bright and optimistic" },
    Mood { name: "Melancholy", color: "#B8C5D9", emoji: "🌧️", description: "Gentle sadness" },
    Mood { name: "Joyful", color: "#FFE5A9", emoji: "☀️", description: "Light and happy" },
    Mood { name: "Creative", color: "#D4A9FF", emoji: "🎨", description: "Inspired and flowing" },
    Mood { name: "Energetic", color: "#FFB8A9", emoji: "⚡", description: "Alive and buzzing" },
    Mood { name: "Peaceful", color: "#A9FFD4", emoji: "🍃", description: "Serene and still" },
    Mood { name: "Anxious", color: "#D9C5B8", emoji: "🌪️", description: "Restless and uneasy" },
    Mood { name: "Sad", color: "#A9B8D9", emoji: "💧", description: "Heavy and quiet" },
    Mood { name: "Angry", color: "#FFA9A9", emoji: "🔥", description: "Burning and frustrated" },
    Mood { name: "Social", color: "#FFC5FF", emoji: "💫", description: "Connected and open" },
    Mood { name: "Introspective", color: "#C9D9E0", emoji: "🔮", description: "Deep in self-reflection" },
    Mood { name: "Excited", color: "#FFCCA9", emoji: "🎆", description: "Bursting with anticipation" },
];

/// Color for a mood name, with the catalog fallback.
pub fn mood_color(name: &str) -> &'static str {
    Mood::by_name(name).map(|m| m.color).unwrap_or(FALLBACK_COLOR)
}

/// Emoji for a mood name, with the catalog fallback.
pub fn mood_emoji(name: &str) -> &'static str {
    Mood::by_name(name).map(|m| m.emoji).unwrap_or(FALLBACK_EMOJI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup() {
        assert_eq!(mood_color("Calm"), "#A9C7FF");
        assert_eq!(mood_emoji("Creative"), "🎨");
        assert_eq!(Mood::by_name("Dreamy").map(|m| m.id()), Some("dreamy".to_string()));
    }

    #[test]
    fn unknown_mood_falls_back() {
        assert_eq!(mood_color("Bored"), FALLBACK_COLOR);
        assert_eq!(mood_emoji("Bored"), FALLBACK_EMOJI);
    }

    #[test]
    fn names_are_unique() {
        for (i, m) in MOODS.iter().enumerate() {
            assert!(MOODS.iter().skip(i + 1).all(|o| o.name != m.name), "{}", m.name);
        }
    }
}
