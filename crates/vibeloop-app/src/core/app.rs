//! The application core.
//!
//! Owns the persisted store and the notification bus, and exposes every
//! shared-collection operation the screens use. Each mutating method is
//! one user action: it computes the next collection value, persists it,
//! then publishes the collection's topic, all before returning, so no
//! partial state is ever observable from the calling screen.

use std::sync::Arc;

use time::OffsetDateTime;
use vibeloop_core::{AuthorId, CommunityId, DreamId};
use vibeloop_store::{keys, FileBackend, Store};

use crate::bus::{ChangeBus, Topic};
use crate::config::{AppConfig, StorageChoice};
use crate::error::AppError;
use crate::state::{
    communities, dreams, AppSettings, CommunityRef, Dream, DreamDraft, EventAttendees, Friend,
    LoopMember, OnboardingForm, OnboardingRecord, ProfilePatch, UpcomingEvent, UserProfile,
};

/// The headless application core.
pub struct AppCore {
    store: Store,
    bus: ChangeBus,
}

impl AppCore {
    pub fn new(config: AppConfig) -> Result<Arc<Self>, AppError> {
        let store = match config.storage {
            StorageChoice::Memory => Store::memory(),
            StorageChoice::File(path) => Store::new(FileBackend::open(path)?),
        };
        Ok(Arc::new(Self {
            store,
            bus: ChangeBus::new(),
        }))
    }

    /// Core over volatile storage; behaves like a fresh install.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self {
            store: Store::memory(),
            bus: ChangeBus::new(),
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// Stable id of the local author.
    ///
    /// Minted once per install and persisted; the full reset removes it
    /// along with everything else, so a fresh install gets a fresh
    /// identity.
    pub fn local_author_id(&self) -> AuthorId {
        let stored: Option<AuthorId> = self.store.load(keys::AUTHOR_ID);
        match stored {
            Some(id) => id,
            None => {
                let id = AuthorId::random();
                self.store.save(keys::AUTHOR_ID, &id);
                id
            }
        }
    }

    // Following

    /// Followed author ids, newest first.
    pub fn following(&self) -> Vec<AuthorId> {
        self.store.load(keys::FOLLOWING)
    }

    pub fn is_following(&self, author: &AuthorId) -> bool {
        self.following().contains(author)
    }

    /// Follow if not followed, unfollow if followed.
    pub fn toggle_follow(&self, author: &AuthorId) {
        let mut following = self.following();
        if let Some(pos) = following.iter().position(|a| a == author) {
            following.remove(pos);
        } else {
            following.insert(0, author.clone());
        }
        self.store.save(keys::FOLLOWING, &following);
        self.bus.publish(Topic::Following);
    }

    // Joined loops and events

    /// Joined communities, newest first. At most one record per id.
    pub fn joined_loops(&self) -> Vec<CommunityRef> {
        self.store
            .load_migrating(keys::JOINED_LOOPS, communities::migrate_joined)
    }

    pub fn is_joined(&self, id: CommunityId) -> bool {
        self.joined_loops().iter().any(|r| r.id == id)
    }

    /// Join a community. Joining an already-joined id is a no-op.
    pub fn join_loop(&self, community: CommunityRef) {
        let mut joined = self.joined_loops();
        if joined.iter().any(|r| r.id == community.id) {
            return;
        }
        joined.insert(0, community);
        self.store.save(keys::JOINED_LOOPS, &joined);
        self.bus.publish(Topic::JoinedLoops);
    }

    /// Leave a community. Leaving an absent id is a no-op.
    pub fn leave_loop(&self, id: CommunityId) {
        let mut joined = self.joined_loops();
        let before = joined.len();
        joined.retain(|r| r.id != id);
        if joined.len() == before {
            return;
        }
        self.store.save(keys::JOINED_LOOPS, &joined);
        self.bus.publish(Topic::JoinedLoops);
    }

    // Dreams

    /// Dreams authored on this device, newest first.
    pub fn dreams(&self) -> Vec<Dream> {
        self.store.load(keys::DREAMS)
    }

    /// Create a dream from the composer draft.
    ///
    /// The new dream is prepended, auto-saved (its id enters the saved
    /// set), and the feed is asked to come forward, matching the
    /// composer's save action.
    pub fn compose_dream(&self, draft: DreamDraft) -> Dream {
        let mut dreams = self.dreams();
        let id = next_dream_id(&dreams);
        let dream = draft.into_dream(id, self.local_author_id(), &self.display_name());
        dreams.insert(0, dream.clone());
        self.store.save(keys::DREAMS, &dreams);
        self.bus.publish(Topic::Dreams);

        let mut saved = self.saved_dream_ids();
        saved.retain(|s| *s != id);
        saved.insert(0, id);
        self.store.save(keys::SAVED_DREAMS, &saved);
        self.bus.publish(Topic::SavedDreams);

        self.bus.publish(Topic::OpenFeed);
        dream
    }

    /// Saved dream ids, pruned of ids with no backing dream record.
    pub fn saved_dream_ids(&self) -> Vec<DreamId> {
        let saved: Vec<DreamId> = self
            .store
            .load_migrating(keys::SAVED_DREAMS, dreams::migrate_saved);
        let dreams = self.dreams();
        let pruned: Vec<DreamId> = saved
            .iter()
            .copied()
            .filter(|id| dreams.iter().any(|d| d.id == *id))
            .collect();
        if pruned.len() != saved.len() {
            tracing::debug!(
                dropped = saved.len() - pruned.len(),
                "pruned saved ids without a backing dream"
            );
            self.store.save(keys::SAVED_DREAMS, &pruned);
        }
        pruned
    }

    pub fn is_dream_saved(&self, id: DreamId) -> bool {
        self.saved_dream_ids().contains(&id)
    }

    /// Save if unsaved, unsave if saved.
    ///
    /// The feed's orb click and the profile's remove button both land
    /// here; there is one saved set, not two.
    pub fn toggle_saved_dream(&self, id: DreamId) {
        let mut saved = self.saved_dream_ids();
        if let Some(pos) = saved.iter().position(|s| *s == id) {
            saved.remove(pos);
        } else {
            saved.insert(0, id);
        }
        self.store.save(keys::SAVED_DREAMS, &saved);
        self.bus.publish(Topic::SavedDreams);
    }

    /// Saved dreams resolved to their records, in saved order.
    pub fn saved_dreams(&self) -> Vec<Dream> {
        let dreams = self.dreams();
        self.saved_dream_ids()
            .into_iter()
            .filter_map(|id| dreams.iter().find(|d| d.id == id).cloned())
            .collect()
    }

    // Profile

    pub fn profile(&self) -> UserProfile {
        self.store.load(keys::PROFILE)
    }

    /// Display name with the fallback chain every screen agrees on:
    /// profile name, then onboarding name, then "You".
    pub fn display_name(&self) -> String {
        let profile = self.profile();
        if !profile.name.trim().is_empty() {
            return profile.name;
        }
        let onboarding = self.onboarding();
        if !onboarding.user_name.trim().is_empty() {
            return onboarding.user_name;
        }
        "You".to_string()
    }

    /// Shallow-merge `patch` into the profile record.
    pub fn update_profile(&self, patch: ProfilePatch) -> Result<(), AppError> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("name", "display name cannot be empty"));
            }
        }
        let mut profile = self.profile();
        patch.apply_to(&mut profile);
        self.store.save(keys::PROFILE, &profile);
        self.bus.publish(Topic::Profile);
        Ok(())
    }

    pub fn avatar(&self) -> Option<String> {
        let avatar: Option<String> = self.store.load(keys::PROFILE_AVATAR);
        avatar.filter(|a| !a.is_empty())
    }

    /// Store the avatar as a data-URI string.
    pub fn set_avatar(&self, data_uri: String) {
        self.store.save(keys::PROFILE_AVATAR, &data_uri);
        self.bus.publish(Topic::Profile);
    }

    // Settings

    pub fn settings(&self) -> AppSettings {
        self.store.load(keys::SETTINGS)
    }

    /// Mutate settings in place; the whole record persists at once and
    /// subscribers (the shell applies dark mode) hear about it.
    pub fn update_settings(&self, mutate: impl FnOnce(&mut AppSettings)) -> AppSettings {
        let mut settings = self.settings();
        mutate(&mut settings);
        self.store.save(keys::SETTINGS, &settings);
        self.bus.publish(Topic::Settings);
        settings
    }

    // Onboarding

    pub fn onboarding(&self) -> OnboardingRecord {
        self.store.load(keys::ONBOARDED)
    }

    pub fn has_onboarded(&self) -> bool {
        self.onboarding().has_onboarded
    }

    /// Seal onboarding; the record is written once and only the full
    /// reset removes it.
    pub fn complete_onboarding(&self, form: OnboardingForm) -> OnboardingRecord {
        let record = form.finish();
        self.store.save(keys::ONBOARDED, &record);
        self.bus.publish(Topic::Onboarding);
        record
    }

    // Constellation friends

    pub fn friends(&self) -> Vec<Friend> {
        self.store.load(keys::CONSTELLATION_FRIENDS)
    }

    /// Connect if unknown, disconnect if present (keyed by friend id).
    pub fn toggle_friend(&self, friend: Friend) {
        let mut friends = self.friends();
        if let Some(pos) = friends.iter().position(|f| f.id == friend.id) {
            friends.remove(pos);
        } else {
            friends.insert(0, friend);
        }
        self.store.save(keys::CONSTELLATION_FRIENDS, &friends);
        self.bus.publish(Topic::Friends);
    }

    // Loop/event auxiliaries

    pub fn recent_members(&self) -> Vec<LoopMember> {
        self.store.load(keys::RECENT_MEMBERS)
    }

    pub fn upcoming_events(&self) -> Vec<UpcomingEvent> {
        self.store.load(keys::UPCOMING_EVENTS)
    }

    /// Attendee names per event.
    pub fn event_attendees(&self) -> EventAttendees {
        self.store.load(keys::EVENT_ATTENDEES)
    }

    pub fn rsvped_events(&self) -> Vec<CommunityId> {
        self.store.load(keys::RSVPED_EVENTS)
    }

    pub fn has_rsvped(&self, id: CommunityId) -> bool {
        self.rsvped_events().contains(&id)
    }

    /// RSVP or un-RSVP, adjusting the attendee count of the matching
    /// upcoming event when one is stored.
    pub fn toggle_rsvp(&self, id: CommunityId) {
        let mut rsvped = self.rsvped_events();
        let attending = if let Some(pos) = rsvped.iter().position(|e| *e == id) {
            rsvped.remove(pos);
            false
        } else {
            rsvped.insert(0, id);
            true
        };
        self.store.save(keys::RSVPED_EVENTS, &rsvped);

        let mut events = self.upcoming_events();
        let mut touched = false;
        for event in events.iter_mut().filter(|e| e.id == id) {
            event.attendees = if attending {
                event.attendees + 1
            } else {
                event.attendees.saturating_sub(1)
            };
            touched = true;
        }
        if touched {
            self.store.save(keys::UPCOMING_EVENTS, &events);
            self.bus.publish(Topic::UpcomingEvents);
        }
        self.bus.publish(Topic::Rsvps);
    }

    // Debug toggle

    pub fn debug_enabled(&self) -> bool {
        self.store.load(keys::DEBUG)
    }

    pub fn set_debug(&self, enabled: bool) {
        self.store.save(keys::DEBUG, &enabled);
    }

    // Reset

    /// Remove every known key and notify every collection topic, so
    /// all mounted screens revert to fresh-install state without a
    /// reload.
    pub fn reset_all(&self) {
        self.store.remove_all(keys::ALL);
        self.bus.publish_all_collections();
    }

    /// Log-out style reset: clears the profile identity only.
    pub fn reset_account(&self) {
        self.store
            .remove_all(&[keys::PROFILE, keys::PROFILE_AVATAR, keys::LEGACY_USER]);
        self.bus.publish(Topic::Profile);
    }
}

/// Dream ids derive from the creation timestamp in milliseconds and
/// stay strictly increasing even when two saves land in the same
/// millisecond.
fn next_dream_id(existing: &[Dream]) -> DreamId {
    let now_ms = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
    let max = existing.iter().map(|d| d.id.0).max().unwrap_or(0);
    DreamId(now_ms.max(max + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_author_id_is_minted_once_and_reset_mints_anew() {
        let app = AppCore::in_memory();
        let first = app.local_author_id();
        assert_eq!(app.local_author_id(), first);

        let dream = app.compose_dream(DreamDraft {
            mood: "Calm".into(),
            text: "mine".into(),
            image: None,
        });
        assert_eq!(dream.author_id, first);

        app.reset_all();
        assert_ne!(app.local_author_id(), first);
    }

    #[test]
    fn follow_toggle_prepends_then_removes() {
        let app = AppCore::in_memory();
        let aria = AuthorId::from_handle("aria");
        let noor = AuthorId::from_handle("noor");

        app.toggle_follow(&aria);
        app.toggle_follow(&noor);
        assert_eq!(app.following(), vec![noor.clone(), aria.clone()]);

        app.toggle_follow(&aria);
        assert_eq!(app.following(), vec![noor]);
        assert!(!app.is_following(&aria));
    }

    #[test]
    fn double_join_keeps_one_record() {
        let app = AppCore::in_memory();
        let club = CommunityRef::new(CommunityId::loop_id(3), "Dream Journal Club", "#C5A9FF");
        app.join_loop(club.clone());
        app.join_loop(club.clone());
        assert_eq!(app.joined_loops(), vec![club]);
    }

    #[test]
    fn leave_absent_is_noop() {
        let app = AppCore::in_memory();
        app.leave_loop(CommunityId::loop_id(9));
        assert!(app.joined_loops().is_empty());
    }

    #[test]
    fn event_and_loop_with_same_number_coexist() {
        let app = AppCore::in_memory();
        app.join_loop(CommunityRef::new(CommunityId::loop_id(3), "Dream Journal Club", "#C5A9FF"));
        app.join_loop(CommunityRef::new(CommunityId::event_id(3), "Midnight Walk", "#C5A9FF"));
        assert_eq!(app.joined_loops().len(), 2);

        app.leave_loop(CommunityId::event_id(3));
        assert!(app.is_joined(CommunityId::loop_id(3)));
        assert!(!app.is_joined(CommunityId::event_id(3)));
    }

    #[test]
    fn composed_dream_is_auto_saved_and_survives_reload() {
        let app = AppCore::in_memory();
        let dream = app.compose_dream(DreamDraft {
            mood: "Dreamy".into(),
            text: "swimming through clouds".into(),
            image: None,
        });
        assert!(app.is_dream_saved(dream.id));

        // a second core over the same backing store sees the record
        let reopened = AppCore {
            store: app.store.clone(),
            bus: ChangeBus::new(),
        };
        assert_eq!(reopened.dreams(), vec![dream.clone()]);
        assert_eq!(reopened.saved_dreams(), vec![dream]);
    }

    #[test]
    fn dangling_saved_ids_are_pruned() {
        let app = AppCore::in_memory();
        app.store().save(keys::SAVED_DREAMS, &vec![DreamId(12345)]);
        assert!(app.saved_dream_ids().is_empty());
        // and the stored entry was rewritten, not just filtered
        let raw: Vec<DreamId> = app.store().load(keys::SAVED_DREAMS);
        assert!(raw.is_empty());
    }

    #[test]
    fn dream_ids_stay_increasing_within_a_burst() {
        let app = AppCore::in_memory();
        let a = app.compose_dream(DreamDraft { mood: "Calm".into(), text: "a".into(), image: None });
        let b = app.compose_dream(DreamDraft { mood: "Calm".into(), text: "b".into(), image: None });
        assert!(b.id > a.id);
    }

    #[test]
    fn profile_patch_rejects_empty_name() {
        let app = AppCore::in_memory();
        let err = app
            .update_profile(ProfilePatch {
                name: Some("   ".into()),
                ..ProfilePatch::default()
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "name", .. }));
    }

    #[test]
    fn display_name_falls_back_to_onboarding_then_you() {
        let app = AppCore::in_memory();
        assert_eq!(app.display_name(), "You");

        app.complete_onboarding(OnboardingForm {
            name: "Sam".into(),
            ..OnboardingForm::default()
        });
        assert_eq!(app.display_name(), "Sam");

        app.update_profile(ProfilePatch {
            name: Some("Samira".into()),
            ..ProfilePatch::default()
        })
        .unwrap();
        assert_eq!(app.display_name(), "Samira");
    }

    #[test]
    fn rsvp_adjusts_stored_attendee_count() {
        let app = AppCore::in_memory();
        let id = CommunityId::event_id(1);
        app.store().save(
            keys::UPCOMING_EVENTS,
            &vec![UpcomingEvent {
                id,
                name: "Quiet Tea Night".into(),
                date: "Tonight, 8:00 PM".into(),
                attendees: 12,
                max_attendees: Some(20),
            }],
        );

        app.toggle_rsvp(id);
        assert!(app.has_rsvped(id));
        assert_eq!(app.upcoming_events()[0].attendees, 13);

        app.toggle_rsvp(id);
        assert!(!app.has_rsvped(id));
        assert_eq!(app.upcoming_events()[0].attendees, 12);
    }

    #[test]
    fn reset_all_restores_fresh_install() {
        let app = AppCore::in_memory();
        app.complete_onboarding(OnboardingForm::default());
        app.toggle_follow(&AuthorId::from_handle("aria"));
        app.join_loop(CommunityRef::new(CommunityId::loop_id(1), "The Creative Collective", "#D4A9FF"));
        app.compose_dream(DreamDraft { mood: "Calm".into(), text: "x".into(), image: None });
        app.update_settings(|s| s.dark_mode = true);

        app.reset_all();

        assert!(!app.has_onboarded());
        assert!(app.following().is_empty());
        assert!(app.joined_loops().is_empty());
        assert!(app.dreams().is_empty());
        assert!(app.saved_dream_ids().is_empty());
        assert_eq!(app.settings(), AppSettings::default());
        assert_eq!(app.profile(), UserProfile::default());
        assert!(app.avatar().is_none());
    }
}
