//! Onboarding record and form.
//!
//! Written once at signup completion, read at app start to decide
//! routing, untouched afterwards except by the full reset. Field names
//! match the browser-era blob.

use serde::{Deserialize, Serialize};

/// Persisted under `vibeloop_onboarded`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingRecord {
    pub has_onboarded: bool,
    pub user_name: String,
    pub age_range: String,
    pub seeking_for: Vec<String>,
    pub expression_style: String,
    pub initial_mood: String,
}

/// What the onboarding flow collects before completion.
///
/// Every field may be skipped; `finish` fills the same defaults the
/// original signup used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingForm {
    pub name: String,
    pub age_range: String,
    pub seeking_for: Vec<String>,
    pub expression_style: String,
    /// Lowercase mood id from the catalog, if one was picked.
    pub mood_id: Option<String>,
}

impl OnboardingForm {
    /// Seal the form into the persisted record, applying defaults for
    /// skipped fields.
    pub fn finish(self) -> OnboardingRecord {
        let initial_mood = self
            .mood_id
            .as_deref()
            .and_then(|id| vibeloop_core::MOODS.iter().find(|m| m.id() == id))
            .map(|m| m.name.to_string())
            .unwrap_or_else(|| "Peaceful".to_string());

        OnboardingRecord {
            has_onboarded: true,
            user_name: if self.name.trim().is_empty() {
                "Traveler".to_string()
            } else {
                self.name
            },
            age_range: if self.age_range.is_empty() {
                "18-24".to_string()
            } else {
                self.age_range
            },
            seeking_for: if self.seeking_for.is_empty() {
                vec!["expression".to_string()]
            } else {
                self.seeking_for
            },
            expression_style: if self.expression_style.is_empty() {
                "spontaneous".to_string()
            } else {
                self.expression_style
            },
            initial_mood,
        }
    }
}

/// Selectable age ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub id: &'static str,
    pub emoji: &'static str,
}

pub const AGE_RANGES: [AgeRange; 4] = [
    AgeRange { id: "13-17", emoji: "🌱" },
    AgeRange { id: "18-24", emoji: "🌸" },
    AgeRange { id: "25-34", emoji: "🌿" },
    AgeRange { id: "35+", emoji: "🌳" },
];

/// What a new user can say they are seeking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekingOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

pub const SEEKING_OPTIONS: [SeekingOption; 6] = [
    SeekingOption { id: "expression", label: "Honest expression", emoji: "💭", color: "#A9C7FF" },
    SeekingOption { id: "connection", label: "Gentle connection", emoji: "🤝", color: "#C5A9FF" },
    SeekingOption { id: "understanding", label: "Being understood", emoji: "🫂", color: "#E0C9D9" },
    SeekingOption { id: "escape", label: "A quiet escape", emoji: "🌙", color: "#FFD4A9" },
    SeekingOption { id: "healing", label: "Space to heal", emoji: "🕊️", color: "#A9FFD4" },
    SeekingOption { id: "creativity", label: "Creative outlet", emoji: "🎨", color: "#D4A9FF" },
];

/// How a new user prefers to express themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpressionStyle {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const EXPRESSION_STYLES: [ExpressionStyle; 4] = [
    ExpressionStyle { id: "words", label: "Mostly words", icon: "✍️", description: "I express through writing" },
    ExpressionStyle { id: "visual", label: "Visual + words", icon: "📸", description: "I love sharing moments" },
    ExpressionStyle { id: "minimal", label: "Minimal sharing", icon: "🌊", description: "I prefer to listen" },
    ExpressionStyle { id: "spontaneous", label: "Whatever feels right", icon: "✨", description: "It depends on my mood" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_fields_take_signup_defaults() {
        let record = OnboardingForm::default().finish();
        assert!(record.has_onboarded);
        assert_eq!(record.user_name, "Traveler");
        assert_eq!(record.age_range, "18-24");
        assert_eq!(record.seeking_for, vec!["expression"]);
        assert_eq!(record.expression_style, "spontaneous");
        assert_eq!(record.initial_mood, "Peaceful");
    }

    #[test]
    fn picked_mood_id_resolves_to_display_name() {
        let form = OnboardingForm {
            name: "Sam".into(),
            mood_id: Some("calm".into()),
            ..OnboardingForm::default()
        };
        let record = form.finish();
        assert_eq!(record.user_name, "Sam");
        assert_eq!(record.initial_mood, "Calm");
    }

    #[test]
    fn record_uses_browser_era_field_names() {
        let record = OnboardingForm {
            name: "Sam".into(),
            ..OnboardingForm::default()
        }
        .finish();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["hasOnboarded"], true);
        assert_eq!(json["userName"], "Sam");
        assert!(json.get("seekingFor").is_some());
    }

    #[test]
    fn partial_blob_decodes_with_defaults() {
        let record: OnboardingRecord =
            serde_json::from_str(r#"{"hasOnboarded":true,"userName":"Ida"}"#).unwrap();
        assert!(record.has_onboarded);
        assert_eq!(record.user_name, "Ida");
        assert!(record.initial_mood.is_empty());
    }
}
