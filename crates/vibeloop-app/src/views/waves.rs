//! The vibe waves trend dashboard.
//!
//! Mood weather, trending posts, rising loops, and mood twins are all
//! fixture data; the joinable and followable bits write into the same
//! shared sets every other screen uses.

use std::sync::Arc;

use parking_lot::Mutex;
use vibeloop_core::{AuthorId, CommunityId};

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;
use crate::fixtures::{
    MoodTwin, MoodWeatherStat, RisingLoop, TrendingPost, MOOD_TWINS, MOOD_WEATHER, RISING_LOOPS,
    TRENDING_POSTS,
};
use crate::state::CommunityRef;
use crate::views::{watch, ViewStatus};

#[derive(Debug, Clone, Default)]
struct WavesSnapshot {
    joined: Vec<CommunityId>,
    following: Vec<AuthorId>,
}

impl WavesSnapshot {
    fn refresh(core: &AppCore, snap: &mut WavesSnapshot) {
        snap.joined = core.joined_loops().into_iter().map(|r| r.id).collect();
        snap.following = core.following();
    }
}

pub struct WavesView {
    core: Arc<AppCore>,
    snapshot: Arc<Mutex<WavesSnapshot>>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl WavesView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            snapshot: Arc::new(Mutex::new(WavesSnapshot::default())),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        WavesSnapshot::refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[Topic::JoinedLoops, Topic::Following, Topic::Reset],
            WavesSnapshot::refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn mood_weather(&self) -> &'static [MoodWeatherStat] {
        &MOOD_WEATHER
    }

    pub fn trending_posts(&self) -> &'static [TrendingPost] {
        &TRENDING_POSTS
    }

    pub fn rising_loops(&self) -> &'static [RisingLoop] {
        &RISING_LOOPS
    }

    pub fn mood_twins(&self) -> &'static [MoodTwin] {
        &MOOD_TWINS
    }

    pub fn is_following(&self, post: &TrendingPost) -> bool {
        self.snapshot
            .lock()
            .following
            .iter()
            .any(|a| a.as_str() == post.author_id)
    }

    pub fn toggle_follow(&self, post: &TrendingPost) {
        self.core.toggle_follow(&AuthorId::from_handle(post.author_id));
    }

    pub fn has_joined(&self, rising: &RisingLoop) -> bool {
        self.snapshot.lock().joined.contains(&rising.id)
    }

    /// Rising loops join into the same set as the browser's loops.
    pub fn join_rising(&self, rising: &RisingLoop) {
        self.core
            .join_loop(CommunityRef::new(rising.id, rising.name, rising.color));
    }

    pub fn is_connected_twin(&self, twin: &MoodTwin) -> bool {
        self.snapshot
            .lock()
            .following
            .iter()
            .any(|a| a.as_str() == twin.author_id)
    }

    /// Connecting to a mood twin is a follow.
    pub fn connect_twin(&self, twin: &MoodTwin) {
        self.core.toggle_follow(&AuthorId::from_handle(twin.author_id));
    }
}

impl Drop for WavesView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}
