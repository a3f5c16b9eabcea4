//! The settings screen and its sub-screens.
//!
//! Toggles write the whole settings record at once and take effect
//! immediately (the shell listens for the dark mode flag). Edit profile
//! is a small form that shallow-merges into the profile record. The
//! reset actions live here too.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;
use crate::error::AppError;
use crate::state::{AppSettings, ProfilePatch};
use crate::views::{watch, ViewStatus};

#[derive(Debug, Clone, Default)]
struct SettingsSnapshot {
    settings: AppSettings,
    display_name: String,
    avatar: Option<String>,
}

impl SettingsSnapshot {
    fn refresh(core: &AppCore, snap: &mut SettingsSnapshot) {
        snap.settings = core.settings();
        snap.display_name = core.display_name();
        snap.avatar = core.avatar();
    }
}

pub struct SettingsView {
    core: Arc<AppCore>,
    snapshot: Arc<Mutex<SettingsSnapshot>>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl SettingsView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            snapshot: Arc::new(Mutex::new(SettingsSnapshot::default())),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        SettingsSnapshot::refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[Topic::Settings, Topic::Profile, Topic::Onboarding, Topic::Reset],
            SettingsSnapshot::refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn settings(&self) -> AppSettings {
        self.snapshot.lock().settings.clone()
    }

    /// Name shown in the settings preview row.
    pub fn preview_name(&self) -> String {
        self.snapshot.lock().display_name.clone()
    }

    pub fn set_notifications(&self, on: bool) {
        self.core.update_settings(|s| s.notifications = on);
    }

    pub fn set_vibe_reminders(&self, on: bool) {
        self.core.update_settings(|s| s.vibe_reminders = on);
    }

    pub fn set_show_mood_history(&self, on: bool) {
        self.core.update_settings(|s| s.show_mood_history = on);
    }

    pub fn set_private_profile(&self, on: bool) {
        self.core.update_settings(|s| s.private_profile = on);
    }

    pub fn set_dark_mode(&self, on: bool) {
        self.core.update_settings(|s| s.dark_mode = on);
    }

    pub fn set_language(&self, language: impl Into<String>) {
        let language = language.into();
        self.core.update_settings(|s| s.language = language);
    }

    /// Open the edit-profile form pre-filled from the stored record.
    pub fn edit_profile(&self) -> EditProfileForm {
        let profile = self.core.profile();
        EditProfileForm {
            name: if profile.name.is_empty() {
                self.preview_name()
            } else {
                profile.name
            },
            username: profile.username.unwrap_or_default(),
            bio: profile.bio,
        }
    }

    pub fn save_profile(&self, form: EditProfileForm) -> Result<(), AppError> {
        self.core.update_profile(ProfilePatch {
            name: Some(form.name),
            username: if form.username.is_empty() {
                None
            } else {
                Some(form.username)
            },
            bio: Some(form.bio),
        })
    }

    pub fn set_avatar(&self, data_uri: impl Into<String>) {
        self.core.set_avatar(data_uri.into());
    }

    pub fn debug_enabled(&self) -> bool {
        self.core.debug_enabled()
    }

    pub fn set_debug(&self, on: bool) {
        self.core.set_debug(on);
    }

    /// Log-out style reset; keeps dreams, loops, and settings.
    pub fn reset_account(&self) {
        self.core.reset_account();
    }

    /// Fresh-install reset.
    pub fn reset_all(&self) {
        self.core.reset_all();
    }
}

impl Drop for SettingsView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}

/// Edit-profile sub-screen state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditProfileForm {
    pub name: String,
    pub username: String,
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_persist_the_whole_record() {
        let core = AppCore::in_memory();
        let mut view = SettingsView::new(core.clone());
        view.mount();

        view.set_dark_mode(true);
        view.set_notifications(false);
        let settings = view.settings();
        assert!(settings.dark_mode);
        assert!(!settings.notifications);
        // remaining fields untouched
        assert!(settings.vibe_reminders);
        assert_eq!(settings.language, "en");
        assert_eq!(core.settings(), settings);
    }

    #[test]
    fn saving_the_edit_form_updates_the_preview() {
        let core = AppCore::in_memory();
        let mut view = SettingsView::new(core.clone());
        view.mount();

        let mut form = view.edit_profile();
        form.name = "Samira".into();
        form.bio = "night walker".into();
        view.save_profile(form).unwrap();

        assert_eq!(view.preview_name(), "Samira");
        assert_eq!(core.profile().bio, "night walker");
        assert_eq!(core.profile().username, None);
    }

    #[test]
    fn empty_name_stays_in_the_form() {
        let core = AppCore::in_memory();
        let mut view = SettingsView::new(core);
        view.mount();

        let mut form = view.edit_profile();
        form.name = "  ".into();
        assert!(view.save_profile(form).is_err());
    }

    #[test]
    fn account_reset_keeps_settings() {
        let core = AppCore::in_memory();
        let mut view = SettingsView::new(core.clone());
        view.mount();

        view.set_dark_mode(true);
        view.save_profile(EditProfileForm {
            name: "Sam".into(),
            username: String::new(),
            bio: String::new(),
        })
        .unwrap();

        view.reset_account();
        assert_eq!(core.profile().name, "");
        assert!(core.settings().dark_mode);
    }
}
