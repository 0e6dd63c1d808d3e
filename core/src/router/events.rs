//! Route change notifications for the view layer

use super::location::Location;
use super::route::Route;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How a navigation was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    /// First navigation, from the host's initial location
    Initial,
    Push,
    Replace,
    Back,
    Forward,
    /// Host-initiated traversal (back/forward in the host context)
    Pop,
}

/// Emitted after every committed navigation
#[derive(Debug, Clone, Serialize)]
pub struct RouteChanged {
    /// Previously active route, if any
    pub from: Option<Route>,
    /// Newly active route
    pub to: Route,
    /// Location as navigated, including query and hash
    pub location: Location,
    pub kind: NavigationKind,
    pub at: DateTime<Utc>,
}

/// Receives route changes. Closures taking `&RouteChanged` implement it.
pub trait RouteObserver {
    fn on_route_changed(&mut self, event: &RouteChanged);
}

impl<F> RouteObserver for F
where
    F: FnMut(&RouteChanged),
{
    fn on_route_changed(&mut self, event: &RouteChanged) {
        self(event)
    }
}

/// Handle returned by `Router::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observers in subscription order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn RouteObserver>)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Box<dyn RouteObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, event: &RouteChanged) {
        for (_, observer) in self.entries.iter_mut() {
            observer.on_route_changed(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
