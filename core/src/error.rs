//! Error types and handling for Orbit Core

use thiserror::Error;

/// Result type alias for Orbit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Orbit Core
#[derive(Error, Debug)]
pub enum Error {
    /// Route table errors, fatal at startup
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    /// Navigation errors, recoverable
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while building a router from a route table.
///
/// These indicate a programming error in the static route table and
/// should abort startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Duplicate route path '{path}' (routes '{first}' and '{second}')")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("Duplicate route name '{name}'")]
    DuplicateName { name: String },

    #[error("Invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Route with path '{path}' has an empty name")]
    EmptyName { path: String },

    #[error("Fallback route '{name}' is not registered")]
    UnknownFallback { name: String },
}

/// Errors returned by navigation operations.
///
/// The caller is expected to handle these, typically by mounting a
/// fallback view. No state is mutated when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("No route matches '{target}'")]
    NotFound { target: String },

    #[error("No previous history entry")]
    NoHistory,

    #[error("No forward history entry")]
    NoForwardHistory,
}

impl NavigationError {
    pub(crate) fn not_found(target: impl Into<String>) -> Self {
        NavigationError::NotFound {
            target: target.into(),
        }
    }
}
