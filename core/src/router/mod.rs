//! Router module for managing page navigation and routing
//!
//! This module maps literal paths and route names to view references,
//! tracks navigation history and notifies observers of route changes.

pub mod events;
pub mod location;
pub mod route;
#[allow(clippy::module_inception)]
pub mod router;
pub mod state;


// Re-export commonly used types
pub use events::{NavigationKind, RouteChanged, RouteObserver, SubscriptionId};
pub use location::{Location, NavigationRequest, Target};
pub use route::{Route, RouteName, RoutePath, ViewRef};
pub use router::{NavigationResult, Router, RouterConfig, TrailingSlash};
pub use state::{HistoryEntry, NavigationState, Status, DEFAULT_MAX_HISTORY};
