//! The profile screen.
//!
//! Identity header, saved dreams resolved to full records, joined
//! loops, and mood statistics over the user's own dreams. The remove
//! button on a saved card toggles the same saved set the feed's orb
//! click does.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use vibeloop_core::DreamId;

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;
use crate::state::{CommunityRef, Dream};
use crate::views::{watch, ViewStatus};

#[derive(Debug, Clone, Default)]
struct ProfileSnapshot {
    display_name: String,
    bio: String,
    avatar: Option<String>,
    dreams: Vec<Dream>,
    saved: Vec<Dream>,
    joined: Vec<CommunityRef>,
}

impl ProfileSnapshot {
    fn refresh(core: &AppCore, snap: &mut ProfileSnapshot) {
        snap.display_name = core.display_name();
        snap.bio = core.profile().bio;
        snap.avatar = core.avatar();
        snap.dreams = core.dreams();
        snap.saved = core.saved_dreams();
        snap.joined = core.joined_loops();
    }
}

pub struct ProfileView {
    core: Arc<AppCore>,
    snapshot: Arc<Mutex<ProfileSnapshot>>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl ProfileView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            snapshot: Arc::new(Mutex::new(ProfileSnapshot::default())),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        ProfileSnapshot::refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[
                Topic::Profile,
                Topic::Dreams,
                Topic::SavedDreams,
                Topic::JoinedLoops,
                Topic::Onboarding,
                Topic::Reset,
            ],
            ProfileSnapshot::refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn display_name(&self) -> String {
        self.snapshot.lock().display_name.clone()
    }

    pub fn bio(&self) -> String {
        self.snapshot.lock().bio.clone()
    }

    pub fn avatar(&self) -> Option<String> {
        self.snapshot.lock().avatar.clone()
    }

    pub fn saved_dreams(&self) -> Vec<Dream> {
        self.snapshot.lock().saved.clone()
    }

    pub fn joined_loops(&self) -> Vec<CommunityRef> {
        self.snapshot.lock().joined.clone()
    }

    pub fn dream_count(&self) -> usize {
        self.snapshot.lock().dreams.len()
    }

    /// Dreams per mood, in first-seen order.
    pub fn mood_stats(&self) -> IndexMap<String, usize> {
        let snap = self.snapshot.lock();
        let mut stats: IndexMap<String, usize> = IndexMap::new();
        for dream in &snap.dreams {
            *stats.entry(dream.mood.clone()).or_insert(0) += 1;
        }
        stats
    }

    /// The remove button on a saved dream card.
    pub fn remove_saved(&self, id: DreamId) {
        self.core.toggle_saved_dream(id);
    }

    pub fn leave_loop(&self, id: vibeloop_core::CommunityId) {
        self.core.leave_loop(id);
    }
}

impl Drop for ProfileView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DreamDraft, OnboardingForm};

    #[test]
    fn header_falls_back_to_onboarding_name() {
        let core = AppCore::in_memory();
        core.complete_onboarding(OnboardingForm {
            name: "Sam".into(),
            ..OnboardingForm::default()
        });

        let mut profile = ProfileView::new(core);
        profile.mount();
        assert_eq!(profile.display_name(), "Sam");
    }

    #[test]
    fn feed_save_and_profile_remove_converge() {
        let core = AppCore::in_memory();
        let dream = core.compose_dream(DreamDraft {
            mood: "Calm".into(),
            text: "drifting".into(),
            image: None,
        });

        let mut profile = ProfileView::new(core.clone());
        profile.mount();
        assert_eq!(profile.saved_dreams(), vec![dream.clone()]);

        profile.remove_saved(dream.id);
        assert!(profile.saved_dreams().is_empty());
        assert!(!core.is_dream_saved(dream.id));

        // the feed's orb click re-saves into the same set
        core.toggle_saved_dream(dream.id);
        assert_eq!(profile.saved_dreams(), vec![dream]);
    }

    #[test]
    fn mood_stats_count_own_dreams() {
        let core = AppCore::in_memory();
        core.compose_dream(DreamDraft { mood: "Calm".into(), text: "a".into(), image: None });
        core.compose_dream(DreamDraft { mood: "Calm".into(), text: "b".into(), image: None });
        core.compose_dream(DreamDraft { mood: "Dreamy".into(), text: "c".into(), image: None });

        let mut profile = ProfileView::new(core);
        profile.mount();
        assert_eq!(profile.dream_count(), 3);
        let stats = profile.mood_stats();
        assert_eq!(stats.get("Calm"), Some(&2));
        assert_eq!(stats.get("Dreamy"), Some(&1));
    }
}
