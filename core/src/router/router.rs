//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! route table validation, path and name resolution, history traversal
//! and route change notification.

use super::events::{NavigationKind, Observers, RouteChanged, RouteObserver, SubscriptionId};
use super::location::{Location, NavigationRequest, Target};
use super::route::{trim_trailing_slash, Route, RouteName};
use super::state::{HistoryEntry, NavigationState, Status, DEFAULT_MAX_HISTORY};
use crate::error::{ConfigurationError, NavigationError};
use crate::history::{join_base, strip_base, HostHistory};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Type alias for navigation results
pub type NavigationResult<T> = Result<T, NavigationError>;

/// How trailing slashes take part in path matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingSlash {
    /// Exact string equality
    #[default]
    Strict,
    /// `/about/` and `/about` are the same path
    Lenient,
}

/// Configuration for the router
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Routes in registration order
    pub routes: Vec<Route>,
    /// Route mounted at startup when the host location matches nothing
    pub fallback: Option<RouteName>,
    /// Maximum number of entries kept behind the current one
    pub max_history: usize,
    /// Path matching mode
    pub trailing_slash: TrailingSlash,
}

impl RouterConfig {
    /// Create a new router configuration
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
            max_history: DEFAULT_MAX_HISTORY,
            trailing_slash: TrailingSlash::Strict,
        }
    }

    /// Add a route to the configuration
    pub fn add_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Add several routes, keeping their order
    pub fn with_routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Set the startup fallback route
    pub fn with_fallback(mut self, name: impl Into<RouteName>) -> Self {
        self.fallback = Some(name.into());
        self
    }

    /// Disable back/forward navigation
    pub fn without_history(mut self) -> Self {
        self.max_history = 0;
        self
    }

    /// Set maximum history size
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Set the trailing slash matching mode
    pub fn with_trailing_slash(mut self, mode: TrailingSlash) -> Self {
        self.trailing_slash = mode;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the route table, the navigation state and the host adapter
pub struct Router {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<RouteName, usize>,
    fallback: Option<usize>,
    trailing_slash: TrailingSlash,
    state: NavigationState,
    host: Option<Box<dyn HostHistory>>,
    observers: Observers,
}

impl Router {
    /// Build a router from an ordered route table with default settings
    pub fn register(routes: impl IntoIterator<Item = Route>) -> Result<Self, ConfigurationError> {
        Self::new(RouterConfig::new().with_routes(routes))
    }

    /// Create a new router with the given configuration
    pub fn new(config: RouterConfig) -> Result<Self, ConfigurationError> {
        let mut by_path: HashMap<String, usize> = HashMap::with_capacity(config.routes.len());
        let mut by_name: HashMap<RouteName, usize> = HashMap::with_capacity(config.routes.len());

        for (index, route) in config.routes.iter().enumerate() {
            route.path.validate()?;
            if route.name.as_str().trim().is_empty() {
                return Err(ConfigurationError::EmptyName {
                    path: route.path.to_string(),
                });
            }

            let key = path_key(config.trailing_slash, route.path.as_str()).to_string();
            if let Some(&existing) = by_path.get(&key) {
                return Err(ConfigurationError::DuplicatePath {
                    path: route.path.to_string(),
                    first: config.routes[existing].name.to_string(),
                    second: route.name.to_string(),
                });
            }
            if by_name.contains_key(&route.name) {
                return Err(ConfigurationError::DuplicateName {
                    name: route.name.to_string(),
                });
            }

            by_path.insert(key, index);
            by_name.insert(route.name.clone(), index);
        }

        let fallback = match &config.fallback {
            Some(name) => Some(*by_name.get(name).ok_or_else(|| {
                ConfigurationError::UnknownFallback {
                    name: name.to_string(),
                }
            })?),
            None => None,
        };

        debug!(routes = config.routes.len(), "Route table registered");

        Ok(Self {
            routes: config.routes,
            by_path,
            by_name,
            fallback,
            trailing_slash: config.trailing_slash,
            state: NavigationState::new(config.max_history),
            host: None,
            observers: Observers::default(),
        })
    }

    /// Attach the host browsing context
    pub fn with_host(mut self, host: impl HostHistory + 'static) -> Self {
        self.host = Some(Box::new(host));
        self
    }

    /// Perform the initial navigation from the host's current location.
    ///
    /// Without a host the router starts at `/`. A location that lies
    /// outside the host base or matches no route mounts the fallback
    /// route when one is configured. Calling it again re-reads the host
    /// and replaces the current entry instead of adding one.
    pub fn start(&mut self) -> NavigationResult<&Route> {
        let (index, location) = self.resolve_host_location()?;
        if self.current_location() == Some(&location) {
            return Ok(&self.routes[index]);
        }
        self.commit(index, location, NavigationKind::Initial)
    }

    /// Resolve a target without navigating
    pub fn resolve(&self, request: impl Into<NavigationRequest>) -> NavigationResult<&Route> {
        let (index, _) = self.lookup(&request.into())?;
        Ok(&self.routes[index])
    }

    /// Navigate to a path or route name, pushing a history entry.
    ///
    /// Navigating to the current location again succeeds without pushing
    /// a duplicate entry or notifying observers.
    pub fn navigate(&mut self, request: impl Into<NavigationRequest>) -> NavigationResult<&Route> {
        let (index, location) = self.lookup(&request.into())?;

        if self.state.current().map(|entry| &entry.location) == Some(&location) {
            debug!(location = %location, "Already at location");
            return Ok(&self.routes[index]);
        }

        self.commit(index, location, NavigationKind::Push)
    }

    /// Navigate, replacing the current history entry instead of pushing
    pub fn replace(&mut self, request: impl Into<NavigationRequest>) -> NavigationResult<&Route> {
        let (index, location) = self.lookup(&request.into())?;
        self.commit(index, location, NavigationKind::Replace)
    }

    /// Go back to the previous history entry
    pub fn back(&mut self) -> NavigationResult<&Route> {
        self.traverse(-1, NavigationKind::Back, true)
    }

    /// Go forward to the next history entry
    pub fn forward(&mut self) -> NavigationResult<&Route> {
        self.traverse(1, NavigationKind::Forward, true)
    }

    /// Move `delta` entries through history (negative goes back)
    pub fn go(&mut self, delta: isize) -> NavigationResult<&Route> {
        let kind = if delta < 0 {
            NavigationKind::Back
        } else {
            NavigationKind::Forward
        };
        self.traverse(delta, kind, true)
    }

    /// Apply a back/forward move the host performed on its own.
    ///
    /// The host already shows the new location, so nothing is written back.
    ///
    /// When the host moved past the entries this router retains, the
    /// router re-reads the host location and follows it.
    pub fn sync_from_host(&mut self, delta: isize) -> NavigationResult<&Route> {
        let outside_window = delta != 0
            && self.host.is_some()
            && self.state.status() == Status::Resolved
            && self.state.peek(delta).is_none();
        if outside_window {
            return self.follow_host(delta);
        }
        self.traverse(delta, NavigationKind::Pop, false)
    }

    /// The active route
    pub fn current(&self) -> Option<&Route> {
        self.state
            .current()
            .and_then(|entry| self.by_name.get(&entry.route))
            .map(|&index| &self.routes[index])
    }

    /// The active location, including query and hash
    pub fn current_location(&self) -> Option<&Location> {
        self.state.current().map(|entry| &entry.location)
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Navigation history, oldest first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.state.entries()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.can_go_forward()
    }

    /// All routes in registration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Get a route by name
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The startup fallback route, if configured
    pub fn fallback(&self) -> Option<&Route> {
        self.fallback.map(|index| &self.routes[index])
    }

    pub fn host(&self) -> Option<&dyn HostHistory> {
        self.host.as_deref()
    }

    /// Mutable access to the host, for moves the router does not make.
    /// Follow them with [`Router::sync_from_host`].
    pub fn host_mut(&mut self) -> Option<&mut (dyn HostHistory + 'static)> {
        self.host.as_deref_mut()
    }

    /// Register an observer, called after every committed navigation
    pub fn subscribe(&mut self, observer: impl RouteObserver + 'static) -> SubscriptionId {
        self.observers.add(Box::new(observer))
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    fn base(&self) -> &str {
        self.host.as_ref().map(|host| host.base()).unwrap_or("")
    }

    /// Find the route for a request and the location it will be recorded under
    fn lookup(&self, request: &NavigationRequest) -> NavigationResult<(usize, Location)> {
        if !request.params.is_empty() {
            let keys: Vec<&str> = request.params.keys().map(String::as_str).collect();
            warn!(request = %request.target, params = ?keys, "Discarded params: literal routes take none");
        }

        let (index, location) = match &request.target {
            Target::Path(location) => {
                let key = path_key(self.trailing_slash, &location.path);
                let index = *self
                    .by_path
                    .get(key)
                    .ok_or_else(|| NavigationError::not_found(location.path.as_str()))?;
                let mut location = location.clone();
                location.path = self.routes[index].path.to_string();
                if request.query.is_some() {
                    location.query = request.query.clone();
                }
                (index, location)
            }
            Target::Name(name) => {
                let index = *self
                    .by_name
                    .get(name)
                    .ok_or_else(|| NavigationError::not_found(name.as_str()))?;
                let location = Location::for_path(&self.routes[index].path)
                    .with_query(request.query.clone());
                (index, location)
            }
        };

        debug!(request = %request.target, route = %self.routes[index].name, "Resolved");
        Ok((index, location))
    }

    /// Record a resolved navigation, update the host and notify observers
    fn commit(
        &mut self,
        index: usize,
        location: Location,
        kind: NavigationKind,
    ) -> NavigationResult<&Route> {
        let from = self.current().cloned();
        let to = self.routes[index].clone();
        let entry = HistoryEntry::new(location.clone(), to.name.clone());

        match kind {
            NavigationKind::Replace | NavigationKind::Initial => self.state.replace(entry),
            _ => self.state.push(entry),
        }

        let base = self.base().to_string();
        if let Some(host) = self.host.as_mut() {
            let url = join_base(&base, &location.to_string());
            match kind {
                NavigationKind::Push => host.push(&url),
                _ => host.replace(&url),
            }
        }

        self.announce(from, to, location, kind);

        Ok(&self.routes[index])
    }

    fn traverse(
        &mut self,
        delta: isize,
        kind: NavigationKind,
        write_host: bool,
    ) -> NavigationResult<&Route> {
        let missing = || {
            if delta <= 0 {
                NavigationError::NoHistory
            } else {
                NavigationError::NoForwardHistory
            }
        };

        let entry = self.state.peek(delta).ok_or_else(missing)?;
        let index = *self
            .by_name
            .get(&entry.route)
            .ok_or_else(|| NavigationError::not_found(entry.route.as_str()))?;
        let location = entry.location.clone();

        if delta == 0 {
            return Ok(&self.routes[index]);
        }

        let from = self.current().cloned();
        self.state.go(delta);

        if write_host {
            if let Some(host) = self.host.as_mut() {
                host.go(delta);
            }
        }

        let to = self.routes[index].clone();
        self.announce(from, to, location, kind);

        Ok(&self.routes[index])
    }

    /// Follow a host that moved outside the retained entries
    fn follow_host(&mut self, delta: isize) -> NavigationResult<&Route> {
        let (index, location) = self.resolve_host_location()?;
        let from = self.current().cloned();
        let to = self.routes[index].clone();
        let entry = HistoryEntry::new(location.clone(), to.name.clone());

        debug!(delta, location = %location, "Host moved past retained history");
        if delta < 0 {
            self.state.prepend(entry);
        } else {
            self.state.push(entry);
        }

        self.announce(from, to, location, NavigationKind::Pop);
        Ok(&self.routes[index])
    }

    /// Resolve the host location, or `/` without a host, falling back
    /// when configured
    fn resolve_host_location(&self) -> NavigationResult<(usize, Location)> {
        let url = self
            .host
            .as_ref()
            .map(|host| host.location())
            .unwrap_or_else(|| "/".to_string());

        let resolved = strip_base(self.base(), &url)
            .ok_or_else(|| NavigationError::not_found(url.as_str()))
            .and_then(|location| self.lookup(&NavigationRequest::new(Target::path(&location))));

        match resolved {
            Ok(found) => Ok(found),
            Err(err) => match self.fallback {
                Some(index) => {
                    warn!(location = %url, "Host location not routable, using fallback");
                    Ok((index, Location::for_path(&self.routes[index].path)))
                }
                None => {
                    warn!(location = %url, "Host location not routable");
                    Err(err)
                }
            },
        }
    }

    fn announce(
        &mut self,
        from: Option<Route>,
        to: Route,
        location: Location,
        kind: NavigationKind,
    ) {
        info!(
            from = from.as_ref().map(|route| route.name.as_str()).unwrap_or("-"),
            to = %to.name,
            location = %location,
            kind = ?kind,
            "Navigated"
        );

        self.observers.emit(&RouteChanged {
            from,
            to,
            location,
            kind,
            at: Utc::now(),
        });
    }
}

fn path_key(mode: TrailingSlash, path: &str) -> &str {
    match mode {
        TrailingSlash::Strict => path,
        TrailingSlash::Lenient => trim_trailing_slash(path),
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("trailing_slash", &self.trailing_slash)
            .field("state", &self.state)
            .field("has_host", &self.host.is_some())
            .field("observers", &self.observers.len())
            .finish()
    }
}
