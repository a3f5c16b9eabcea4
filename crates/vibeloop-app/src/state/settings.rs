//! App settings.
//!
//! Applied immediately on change; dark mode in particular surfaces to
//! the shell so it can restyle the document.

use serde::{Deserialize, Serialize};

/// Persisted under `vibeloop_settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub notifications: bool,
    pub vibe_reminders: bool,
    pub show_mood_history: bool,
    pub private_profile: bool,
    pub dark_mode: bool,
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            notifications: true,
            vibe_reminders: true,
            show_mood_history: true,
            private_profile: false,
            dark_mode: false,
            language: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_install() {
        let settings = AppSettings::default();
        assert!(settings.notifications && settings.vibe_reminders && settings.show_mood_history);
        assert!(!settings.private_profile && !settings.dark_mode);
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn partial_blob_keeps_defaults_for_missing_fields() {
        let settings: AppSettings = serde_json::from_str(r#"{"darkMode":true}"#).unwrap();
        assert!(settings.dark_mode);
        assert!(settings.notifications);
        assert_eq!(settings.language, "en");
    }
}
