//! Screen view-models.
//!
//! Every screen follows the same lifecycle against the collections it
//! shows: mount takes a snapshot and subscribes to the relevant topics,
//! a notification replaces the whole snapshot with a fresh read, and
//! dropping the view unsubscribes. Snapshots are full replaces, never
//! incremental patches.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::bus::{Subscription, Topic};
use crate::core::AppCore;

pub mod composer;
pub mod constellation;
pub mod feed;
pub mod loops;
pub mod onboarding;
pub mod profile;
pub mod settings;
pub mod waves;

pub use composer::ComposerView;
pub use constellation::ConstellationView;
pub use feed::FeedView;
pub use loops::{ChatMessage, EventDetailView, LoopDetailView, LoopsView};
pub use onboarding::{OnboardingStep, OnboardingView};
pub use profile::ProfileView;
pub use settings::{EditProfileForm, SettingsView};
pub use waves::WavesView;

/// Lifecycle state of a view.
///
/// Reads are synchronous so Loading is instant in practice, but it
/// still exists so a renderer can distinguish "not mounted yet" from
/// "mounted and empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Loading,
    Ready,
}

/// Subscribe `refresh` to `topics`, rewriting the shared snapshot cell
/// on every notification.
///
/// Handlers hold only weak references, so a dropped view stops
/// refreshing even if a guard were leaked; normally the returned
/// subscriptions unregister on drop.
fn watch<S: Send + 'static>(
    core: &Arc<AppCore>,
    cell: &Arc<Mutex<S>>,
    topics: &[Topic],
    refresh: impl Fn(&AppCore, &mut S) + Send + Sync + Clone + 'static,
) -> Vec<Subscription> {
    topics
        .iter()
        .map(|&topic| {
            let weak_core = Arc::downgrade(core);
            let weak_cell = Arc::downgrade(cell);
            let refresh = refresh.clone();
            core.bus().subscribe(topic, move || {
                if let (Some(core), Some(cell)) = (weak_core.upgrade(), weak_cell.upgrade()) {
                    refresh(&core, &mut cell.lock());
                }
            })
        })
        .collect()
}
