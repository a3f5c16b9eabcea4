//! The constellation screen.
//!
//! Persisted friend stars plus a connected marker derived from the
//! following set, so following someone from the feed lights them up
//! here in the same session.

use std::sync::Arc;

use parking_lot::Mutex;
use vibeloop_core::AuthorId;

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;
use crate::state::Friend;
use crate::views::{watch, ViewStatus};

#[derive(Debug, Clone, Default)]
struct ConstellationSnapshot {
    friends: Vec<Friend>,
    following: Vec<AuthorId>,
}

impl ConstellationSnapshot {
    fn refresh(core: &AppCore, snap: &mut ConstellationSnapshot) {
        snap.friends = core.friends();
        snap.following = core.following();
    }
}

pub struct ConstellationView {
    core: Arc<AppCore>,
    snapshot: Arc<Mutex<ConstellationSnapshot>>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl ConstellationView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            snapshot: Arc::new(Mutex::new(ConstellationSnapshot::default())),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        ConstellationSnapshot::refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[Topic::Friends, Topic::Following, Topic::Reset],
            ConstellationSnapshot::refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn friends(&self) -> Vec<Friend> {
        self.snapshot.lock().friends.clone()
    }

    /// A star is connected when it is a saved friend or its author is
    /// followed anywhere in the app.
    pub fn is_connected(&self, author: &AuthorId) -> bool {
        let snap = self.snapshot.lock();
        snap.following.contains(author) || snap.friends.iter().any(|f| &f.author_id == author)
    }

    pub fn toggle_friend(&self, friend: Friend) {
        self.core.toggle_friend(friend);
    }

    pub fn toggle_follow(&self, author: &AuthorId) {
        self.core.toggle_follow(author);
    }
}

impl Drop for ConstellationView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}
