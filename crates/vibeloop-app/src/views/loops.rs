//! The community browser and the loop/event detail screens.
//!
//! The browser filters the fixture catalogs; the detail screens mutate
//! the joined and RSVP sets. Loop chat is session-local and vanishes
//! with the view, as it always has.

use std::sync::Arc;

use parking_lot::Mutex;
use vibeloop_core::{AuthorId, CommunityId};

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;
use crate::fixtures::{self, EventFixture, LoopFixture};
use crate::state::{CommunityRef, LoopMember};
use crate::views::{watch, ViewStatus};

#[derive(Debug, Clone, Default)]
struct BrowseSnapshot {
    joined: Vec<CommunityRef>,
    search: String,
    /// Vibe name filter; `None` shows every community.
    vibe: Option<String>,
}

impl BrowseSnapshot {
    fn refresh(core: &AppCore, snap: &mut BrowseSnapshot) {
        snap.joined = core.joined_loops();
    }
}

/// The Local Loops browser.
pub struct LoopsView {
    core: Arc<AppCore>,
    snapshot: Arc<Mutex<BrowseSnapshot>>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl LoopsView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            snapshot: Arc::new(Mutex::new(BrowseSnapshot::default())),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        BrowseSnapshot::refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[Topic::JoinedLoops, Topic::Reset],
            BrowseSnapshot::refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn set_search(&self, query: impl Into<String>) {
        self.snapshot.lock().search = query.into();
    }

    pub fn set_vibe_filter(&self, vibe: Option<String>) {
        self.snapshot.lock().vibe = vibe;
    }

    /// Loops passing the vibe filter and text search.
    pub fn visible_loops(&self) -> Vec<&'static LoopFixture> {
        let snap = self.snapshot.lock();
        fixtures::LOOPS
            .iter()
            .filter(|l| snap.vibe.as_deref().map_or(true, |v| l.vibe == v))
            .filter(|l| matches_search(&snap.search, &[l.name, l.description, l.location]))
            .collect()
    }

    /// Events passing the vibe filter and text search.
    pub fn visible_events(&self) -> Vec<&'static EventFixture> {
        let snap = self.snapshot.lock();
        fixtures::EVENTS
            .iter()
            .filter(|e| snap.vibe.as_deref().map_or(true, |v| e.vibe == v))
            .filter(|e| matches_search(&snap.search, &[e.name, e.description, e.location]))
            .collect()
    }

    pub fn is_joined(&self, id: CommunityId) -> bool {
        self.snapshot.lock().joined.iter().any(|r| r.id == id)
    }

    pub fn join(&self, fixture: &LoopFixture) {
        self.core
            .join_loop(CommunityRef::new(fixture.id, fixture.name, fixture.color));
    }

    pub fn leave(&self, id: CommunityId) {
        self.core.leave_loop(id);
    }
}

impl Drop for LoopsView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}

fn matches_search(query: &str, haystacks: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    haystacks.iter().any(|h| h.to_lowercase().contains(&query))
}

/// A session-local chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub own: bool,
}

#[derive(Debug, Clone, Default)]
struct LoopDetailSnapshot {
    joined: bool,
    members: Vec<LoopMember>,
    following: Vec<AuthorId>,
}

/// Detail screen for one loop.
pub struct LoopDetailView {
    core: Arc<AppCore>,
    loop_id: CommunityId,
    snapshot: Arc<Mutex<LoopDetailSnapshot>>,
    /// Not persisted; cleared when the view goes away.
    chat: Vec<ChatMessage>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl LoopDetailView {
    pub fn new(core: Arc<AppCore>, loop_id: CommunityId) -> Self {
        Self {
            core,
            loop_id,
            snapshot: Arc::new(Mutex::new(LoopDetailSnapshot::default())),
            chat: Vec::new(),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        let loop_id = self.loop_id;
        let refresh = move |core: &AppCore, snap: &mut LoopDetailSnapshot| {
            snap.joined = core.is_joined(loop_id);
            snap.members = core.recent_members();
            snap.following = core.following();
        };
        refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[Topic::JoinedLoops, Topic::Following, Topic::Reset],
            refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn fixture(&self) -> Option<&'static LoopFixture> {
        fixtures::loop_by_id(self.loop_id)
    }

    pub fn is_joined(&self) -> bool {
        self.snapshot.lock().joined
    }

    pub fn toggle_joined(&self) {
        if self.is_joined() {
            self.core.leave_loop(self.loop_id);
        } else if let Some(fixture) = self.fixture() {
            self.core
                .join_loop(CommunityRef::new(fixture.id, fixture.name, fixture.color));
        }
    }

    pub fn recent_members(&self) -> Vec<LoopMember> {
        self.snapshot.lock().members.clone()
    }

    pub fn is_following_member(&self, member: &LoopMember) -> bool {
        self.snapshot.lock().following.contains(&member.id)
    }

    pub fn toggle_follow_member(&self, member: &LoopMember) {
        self.core.toggle_follow(&member.id);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.chat
    }

    /// Post a message to the session-local chat. Blank input is ignored.
    pub fn send_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }
        self.chat.push(ChatMessage {
            author: self.core.display_name(),
            text,
            own: true,
        });
    }
}

impl Drop for LoopDetailView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}

#[derive(Debug, Clone, Default)]
struct EventDetailSnapshot {
    rsvped: bool,
    attendees: Vec<String>,
    stored_attendee_count: Option<u32>,
}

/// Detail screen for one event.
pub struct EventDetailView {
    core: Arc<AppCore>,
    event_id: CommunityId,
    snapshot: Arc<Mutex<EventDetailSnapshot>>,
    status: ViewStatus,
    subs: Vec<Subscription>,
}

impl EventDetailView {
    pub fn new(core: Arc<AppCore>, event_id: CommunityId) -> Self {
        Self {
            core,
            event_id,
            snapshot: Arc::new(Mutex::new(EventDetailSnapshot::default())),
            status: ViewStatus::Loading,
            subs: Vec::new(),
        }
    }

    pub fn mount(&mut self) {
        let event_id = self.event_id;
        let refresh = move |core: &AppCore, snap: &mut EventDetailSnapshot| {
            snap.rsvped = core.has_rsvped(event_id);
            snap.attendees = core
                .event_attendees()
                .remove(&event_id)
                .unwrap_or_default();
            snap.stored_attendee_count = core
                .upcoming_events()
                .iter()
                .find(|e| e.id == event_id)
                .map(|e| e.attendees);
        };
        refresh(&self.core, &mut self.snapshot.lock());
        self.subs = watch(
            &self.core,
            &self.snapshot,
            &[Topic::Rsvps, Topic::UpcomingEvents, Topic::Reset],
            refresh,
        );
        self.status = ViewStatus::Ready;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn fixture(&self) -> Option<&'static EventFixture> {
        fixtures::event_by_id(self.event_id)
    }

    pub fn has_rsvped(&self) -> bool {
        self.snapshot.lock().rsvped
    }

    pub fn toggle_rsvp(&self) {
        self.core.toggle_rsvp(self.event_id);
    }

    pub fn attendee_names(&self) -> Vec<String> {
        self.snapshot.lock().attendees.clone()
    }

    /// Attendee count as shown on the card: the stored per-user event
    /// record when one exists, otherwise the fixture baseline.
    pub fn attendee_count(&self) -> u32 {
        self.snapshot
            .lock()
            .stored_attendee_count
            .or_else(|| self.fixture().map(|f| f.attendees))
            .unwrap_or(0)
    }
}

impl Drop for EventDetailView {
    fn drop(&mut self) {
        self.subs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_filters_by_vibe_and_search() {
        let core = AppCore::in_memory();
        let mut view = LoopsView::new(core);
        view.mount();

        assert_eq!(view.visible_loops().len(), 6);
        view.set_vibe_filter(Some("Dreamy".into()));
        let dreamy: Vec<&str> = view.visible_loops().iter().map(|l| l.name).collect();
        assert_eq!(dreamy, vec!["Dream Journal Club", "Astronomy Club"]);

        view.set_vibe_filter(None);
        view.set_search("coffee");
        let hits: Vec<&str> = view.visible_loops().iter().map(|l| l.name).collect();
        assert_eq!(hits, vec!["Book & Coffee Meetups"]);
        assert_eq!(view.visible_events().len(), 1);
    }

    #[test]
    fn detail_join_toggles_and_browser_sees_it() {
        let core = AppCore::in_memory();
        let mut browser = LoopsView::new(core.clone());
        browser.mount();
        let mut detail = LoopDetailView::new(core, CommunityId::loop_id(3));
        detail.mount();

        assert!(!detail.is_joined());
        detail.toggle_joined();
        assert!(detail.is_joined());
        // the browser's snapshot refreshed through the bus
        assert!(browser.is_joined(CommunityId::loop_id(3)));

        detail.toggle_joined();
        assert!(!detail.is_joined());
        assert!(!browser.is_joined(CommunityId::loop_id(3)));
    }

    #[test]
    fn chat_is_session_local() {
        let core = AppCore::in_memory();
        let mut detail = LoopDetailView::new(core.clone(), CommunityId::loop_id(2));
        detail.mount();
        detail.send_message("anyone walking tonight?");
        detail.send_message("   ");
        assert_eq!(detail.messages().len(), 1);
        assert!(detail.messages()[0].own);

        drop(detail);
        let mut again = LoopDetailView::new(core, CommunityId::loop_id(2));
        again.mount();
        assert!(again.messages().is_empty());
    }

    #[test]
    fn event_rsvp_roundtrip_with_fixture_fallback_count() {
        let core = AppCore::in_memory();
        let mut detail = EventDetailView::new(core, CommunityId::event_id(1));
        detail.mount();

        // no stored record yet, count comes from the fixture
        assert_eq!(detail.attendee_count(), 12);
        assert!(!detail.has_rsvped());
        detail.toggle_rsvp();
        assert!(detail.has_rsvped());
        detail.toggle_rsvp();
        assert!(!detail.has_rsvped());
    }
}
