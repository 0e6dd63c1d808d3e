//! # Orbit Core
//!
//! Core library for Orbit - a declarative client-side router.
//!
//! A [`Router`] owns an immutable route table binding literal paths and
//! unique names to opaque view references. It resolves navigation
//! requests, keeps a browser-like history stack, writes location changes
//! to a [`HostHistory`] and notifies observers so a view layer can mount
//! the matching view.

// Core modules
pub mod config;
pub mod error;
pub mod history;
pub mod router;

// Re-export commonly used types
pub use config::{RouteSpec, RouteTableFile};
pub use error::{ConfigurationError, Error, NavigationError, Result};
pub use history::{HostHistory, MemoryHistory};
pub use router::{
    HistoryEntry, Location, NavigationKind, NavigationRequest, Route, RouteChanged, RouteName,
    RouteObserver, RoutePath, Router, RouterConfig, Status, Target, TrailingSlash, ViewRef,
};

/// Current version of the orbit-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
