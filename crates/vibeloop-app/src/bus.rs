//! Change notification bus.
//!
//! When one mounted view mutates a shared collection, every other view
//! currently showing that collection re-reads it. The bus carries no
//! payload: subscribers take a fresh snapshot from the store, which is
//! the single source of truth.
//!
//! Fan-out is synchronous; all subscribers run before `publish`
//! returns, on the caller's thread. Handlers are invoked outside the
//! registry lock so a handler may subscribe or unsubscribe re-entrantly.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// One topic per shared collection, plus the cross-navigation signals
/// empty-state prompts use to move the user to another screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Following,
    JoinedLoops,
    SavedDreams,
    Dreams,
    Profile,
    Settings,
    Onboarding,
    Friends,
    Rsvps,
    UpcomingEvents,
    /// Everything was reset to fresh-install state.
    Reset,
    /// Navigate to the dream composer.
    OpenComposer,
    /// Navigate to the loops browser.
    OpenLoops,
    /// Navigate to the feed.
    OpenFeed,
    /// Navigate to the mood preferences screen.
    OpenMoodPrefs,
}

impl Topic {
    /// Topics covering persisted collections (excludes navigation).
    pub const COLLECTIONS: [Topic; 11] = [
        Topic::Following,
        Topic::JoinedLoops,
        Topic::SavedDreams,
        Topic::Dreams,
        Topic::Profile,
        Topic::Settings,
        Topic::Onboarding,
        Topic::Friends,
        Topic::Rsvps,
        Topic::UpcomingEvents,
        Topic::Reset,
    ];
}

type Handler = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: HashMap<Topic, Vec<(u64, Handler)>>,
}

/// Process-wide publish/subscribe registry, cheap to clone.
#[derive(Clone, Default)]
pub struct ChangeBus {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `topic` until the returned guard drops.
    ///
    /// Handlers must tolerate being called when nothing they care about
    /// changed; re-reading the collection is always safe.
    pub fn subscribe(&self, topic: Topic, handler: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.lock();
            registry.next_id += 1;
            let id = registry.next_id;
            registry
                .handlers
                .entry(topic)
                .or_default()
                .push((id, Arc::new(handler)));
            id
        };
        Subscription {
            registry: Arc::downgrade(&self.registry),
            topic,
            id,
        }
    }

    /// Invoke every current subscriber of `topic`.
    pub fn publish(&self, topic: Topic) {
        let handlers: Vec<Handler> = {
            let registry = self.registry.lock();
            registry
                .handlers
                .get(&topic)
                .map(|subs| subs.iter().map(|(_, h)| h.clone()).collect())
                .unwrap_or_default()
        };
        for handler in handlers {
            handler();
        }
    }

    /// Publish every collection topic, used by the full reset.
    pub fn publish_all_collections(&self) {
        for topic in Topic::COLLECTIONS {
            self.publish(topic);
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry
            .lock()
            .handlers
            .get(&topic)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

/// Guard for one subscription; dropping it unregisters the handler.
#[must_use = "dropping the subscription immediately unsubscribes"]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    topic: Topic,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock();
            if let Some(subs) = registry.handlers.get_mut(&self.topic) {
                subs.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn publish_reaches_current_subscribers() {
        let bus = ChangeBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits2 = hits.clone();
        let _sub = bus.subscribe(Topic::Following, move || {
            hits2.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(Topic::Following);
        bus.publish(Topic::Following);
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        // different topic does not fire
        bus.publish(Topic::SavedDreams);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let bus = ChangeBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits2 = hits.clone();
        let sub = bus.subscribe(Topic::JoinedLoops, move || {
            hits2.fetch_add(1, Ordering::SeqCst);
        });
        bus.publish(Topic::JoinedLoops);
        drop(sub);
        bus.publish(Topic::JoinedLoops);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(Topic::JoinedLoops), 0);
    }

    #[test]
    fn handler_may_subscribe_reentrantly() {
        let bus = ChangeBus::new();
        let bus2 = bus.clone();
        let nested: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

        let nested2 = nested.clone();
        let _sub = bus.subscribe(Topic::Profile, move || {
            nested2.lock().push(bus2.subscribe(Topic::Profile, || {}));
        });

        bus.publish(Topic::Profile);
        assert_eq!(bus.subscriber_count(Topic::Profile), 2);
    }

    #[test]
    fn fan_out_runs_before_publish_returns() {
        let bus = ChangeBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let o1 = order.clone();
        let _a = bus.subscribe(Topic::Settings, move || o1.lock().push("a"));
        let o2 = order.clone();
        let _b = bus.subscribe(Topic::Settings, move || o2.lock().push("b"));

        bus.publish(Topic::Settings);
        assert_eq!(*order.lock(), vec!["a", "b"]);
    }
}
