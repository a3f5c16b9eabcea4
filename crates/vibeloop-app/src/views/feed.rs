//! The dream feed.
//!
//! Shows the local author's dreams newest first, filterable by mood.
//! The orb click on a feed card toggles membership in the same saved
//! set the profile's remove button mutates.

use std::sync::Arc;

use parking_lot::Mutex;
use vibeloop_core::{AuthorId, DreamId};

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;
use crate::state::Dream;
use crate::views::{watch, ViewStatus};

#[derive(Debug, Clone, Default)]
struct FeedSnapshot {
    dreams: Vec<Dream>,
    saved: Vec<DreamId>,
    following: Vec<AuthorId>,
    /// Mood name filter; `None` shows everything.
    filter: Option<String>,
}

impl FeedSnapshot {
    fn refresh(core: &AppCore, snap: &mut FeedSnapshot) {
        snap.dreams = core.dreams();
        snap.saved = core.saved_dream_ids();
        snap.following = core.following();
    }
}

pub struct FeedView {
    core: Arc<AppCore>,
    snapshot: Arc<Mutex<FeedSnapshot>>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl FeedView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            snapshot: Arc::new(Mutex::new(FeedSnapshot::default())),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    /// Take the initial snapshot and start tracking changes.
    pub fn mount(&mut self) {
        FeedSnapshot::refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[Topic::Dreams, Topic::SavedDreams, Topic::Following, Topic::Reset],
            FeedSnapshot::refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// Dreams passing the current mood filter, newest first.
    pub fn visible_dreams(&self) -> Vec<Dream> {
        let snap = self.snapshot.lock();
        snap.dreams
            .iter()
            .filter(|d| snap.filter.as_deref().map_or(true, |m| d.mood == m))
            .cloned()
            .collect()
    }

    /// Whether the new-user prompt shows instead of a dream list.
    ///
    /// True only when no dreams exist at all; a filter that matches
    /// nothing is not the new-user state.
    pub fn shows_empty_prompt(&self) -> bool {
        self.snapshot.lock().dreams.is_empty()
    }

    pub fn mood_filter(&self) -> Option<String> {
        self.snapshot.lock().filter.clone()
    }

    pub fn set_mood_filter(&self, mood: Option<String>) {
        self.snapshot.lock().filter = mood;
    }

    pub fn is_saved(&self, id: DreamId) -> bool {
        self.snapshot.lock().saved.contains(&id)
    }

    pub fn is_following(&self, author: &AuthorId) -> bool {
        self.snapshot.lock().following.contains(author)
    }

    /// Orb click on a feed card.
    pub fn toggle_saved(&self, id: DreamId) {
        self.core.toggle_saved_dream(id);
    }

    pub fn toggle_follow(&self, author: &AuthorId) {
        self.core.toggle_follow(author);
    }

    // Empty-state prompt actions; each cross-navigates via the bus.

    pub fn open_composer(&self) {
        self.core.bus().publish(Topic::OpenComposer);
    }

    pub fn open_loops(&self) {
        self.core.bus().publish(Topic::OpenLoops);
    }

    pub fn open_mood_prefs(&self) {
        self.core.bus().publish(Topic::OpenMoodPrefs);
    }
}

impl Drop for FeedView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}
