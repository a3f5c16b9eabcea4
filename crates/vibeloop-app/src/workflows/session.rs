//! Session routing.
//!
//! The shell asks the session where the user is: still logging in,
//! inside onboarding, or authenticated on some screen. A stored
//! onboarding record routes straight to the feed with the stored
//! initial mood as the default filter; a reset drops the session back
//! to login like a brand-new install.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStage {
    Login,
    Onboarding,
    Authenticated,
}

/// Screens reachable once authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Feed,
    Composer,
    Loops,
    Constellation,
    Waves,
    Profile,
    Settings,
}

#[derive(Debug, Clone)]
struct Route {
    stage: AuthStage,
    screen: Screen,
    /// Mood filter the feed opens with, from the onboarding record.
    feed_mood: Option<String>,
    display_name: String,
}

pub struct Session {
    core: Arc<AppCore>,
    route: Arc<Mutex<Route>>,
    _subs: Vec<Subscription>,
}

impl Session {
    /// Decide the initial route from persisted state and start
    /// listening for onboarding completion, cross-navigation, and
    /// resets.
    pub fn start(core: Arc<AppCore>) -> Self {
        let route = Arc::new(Mutex::new(Self::route_from_store(&core)));

        let mut subs = Vec::new();
        for (topic, apply) in [
            (Topic::Onboarding, on_onboarding as fn(&AppCore, &mut Route)),
            (Topic::Reset, on_reset),
            (Topic::Profile, on_profile),
            (Topic::OpenComposer, on_open(Screen::Composer)),
            (Topic::OpenLoops, on_open(Screen::Loops)),
            (Topic::OpenFeed, on_open(Screen::Feed)),
            (Topic::OpenMoodPrefs, on_open(Screen::Settings)),
        ] {
            let weak_core = Arc::downgrade(&core);
            let weak_route = Arc::downgrade(&route);
            subs.push(core.bus().subscribe(topic, move || {
                if let (Some(core), Some(route)) = (weak_core.upgrade(), weak_route.upgrade()) {
                    apply(&core, &mut route.lock());
                }
            }));
        }

        Self {
            core,
            route,
            _subs: subs,
        }
    }

    fn route_from_store(core: &AppCore) -> Route {
        let record = core.onboarding();
        if record.has_onboarded {
            Route {
                stage: AuthStage::Authenticated,
                screen: Screen::Feed,
                feed_mood: Some(record.initial_mood).filter(|m| !m.is_empty()),
                display_name: core.display_name(),
            }
        } else {
            Route {
                stage: AuthStage::Login,
                screen: Screen::Feed,
                feed_mood: None,
                display_name: core.display_name(),
            }
        }
    }

    pub fn core(&self) -> &Arc<AppCore> {
        &self.core
    }

    pub fn stage(&self) -> AuthStage {
        self.route.lock().stage
    }

    pub fn screen(&self) -> Screen {
        self.route.lock().screen
    }

    /// Mood filter the feed opens with.
    pub fn feed_mood(&self) -> Option<String> {
        self.route.lock().feed_mood.clone()
    }

    pub fn display_name(&self) -> String {
        self.route.lock().display_name.clone()
    }

    /// The login stub: an onboarded user goes straight to the feed,
    /// anyone else enters onboarding.
    pub fn login(&self) {
        let next = Self::route_from_store(&self.core);
        let mut route = self.route.lock();
        *route = next;
        if route.stage == AuthStage::Login {
            route.stage = AuthStage::Onboarding;
        }
    }

    /// Direct navigation from the tab bar.
    pub fn navigate(&self, screen: Screen) {
        let mut route = self.route.lock();
        if route.stage == AuthStage::Authenticated {
            route.screen = screen;
        }
    }
}

fn on_onboarding(core: &AppCore, route: &mut Route) {
    let record = core.onboarding();
    if record.has_onboarded {
        route.stage = AuthStage::Authenticated;
        route.screen = Screen::Feed;
        route.feed_mood = Some(record.initial_mood).filter(|m| !m.is_empty());
        route.display_name = core.display_name();
    }
}

fn on_reset(core: &AppCore, route: &mut Route) {
    if !core.has_onboarded() {
        route.stage = AuthStage::Login;
        route.screen = Screen::Feed;
        route.feed_mood = None;
        route.display_name = core.display_name();
    }
}

fn on_profile(core: &AppCore, route: &mut Route) {
    route.display_name = core.display_name();
}

fn on_open(screen: Screen) -> fn(&AppCore, &mut Route) {
    // one fn per variant keeps the handler table a plain fn array
    match screen {
        Screen::Composer => |_, r| r.screen = Screen::Composer,
        Screen::Loops => |_, r| r.screen = Screen::Loops,
        Screen::Feed => |_, r| r.screen = Screen::Feed,
        Screen::Settings => |_, r| r.screen = Screen::Settings,
        Screen::Constellation => |_, r| r.screen = Screen::Constellation,
        Screen::Waves => |_, r| r.screen = Screen::Waves,
        Screen::Profile => |_, r| r.screen = Screen::Profile,
    }
}
