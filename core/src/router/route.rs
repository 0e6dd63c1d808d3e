//! Route definitions and utilities
//!
//! This module defines the core route types: literal paths, unique
//! symbolic names and the opaque view reference a route forwards to the
//! view layer.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_newtype!(
    /// Literal path a route is registered under, e.g. `/about`
    RoutePath
);

string_newtype!(
    /// Unique symbolic identifier used for programmatic navigation
    RouteName
);

string_newtype!(
    /// Opaque reference to a renderable component.
    ///
    /// The router never inspects it; it is handed to the view layer as-is.
    ViewRef
);

impl RoutePath {
    /// Check that the path is a literal absolute path.
    ///
    /// Query strings, fragments and dynamic segments are rejected: matching
    /// is exact, so a pattern here could never be reached.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidPath {
            path: self.0.clone(),
            reason: reason.to_string(),
        };

        if !self.0.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if self.0.contains(['?', '#']) {
            return Err(invalid("must not contain a query or fragment"));
        }
        if self.0.contains("//") {
            return Err(invalid("must not contain empty segments"));
        }
        if self
            .0
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.contains('*'))
        {
            return Err(invalid("dynamic segments are not supported"));
        }

        Ok(())
    }

    /// The path with any trailing slash removed (`/` stays `/`)
    pub fn trimmed(&self) -> &str {
        trim_trailing_slash(&self.0)
    }
}

pub(crate) fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Route definition binding a path and name to a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Literal path for this route
    pub path: RoutePath,
    /// Unique name for this route
    pub name: RouteName,
    /// View to mount when this route is active
    pub view: ViewRef,
    /// Additional metadata for the route
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl Route {
    /// Create a new route
    pub fn new(
        path: impl Into<RoutePath>,
        name: impl Into<RouteName>,
        view: impl Into<ViewRef>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
            meta: BTreeMap::new(),
        }
    }

    /// Add metadata to this route
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Get a metadata value
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newtype_traits() {
        let name = RouteName::from("About");

        assert_eq!(format!("{}", name), "About");

        let s: &str = name.as_ref();
        assert_eq!(s, "About");

        let s: &str = name.borrow();
        assert_eq!(s, "About");
    }

    #[test]
    fn test_path_validation() {
        assert!(RoutePath::from("/").validate().is_ok());
        assert!(RoutePath::from("/planetbuilder").validate().is_ok());
        assert!(RoutePath::from("/a/b/").validate().is_ok());

        for bad in ["about", "", "/about?x=1", "/about#top", "/planet/:id", "/a//b", "/*"] {
            assert!(
                matches!(
                    RoutePath::from(bad).validate(),
                    Err(ConfigurationError::InvalidPath { .. })
                ),
                "expected '{}' to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(RoutePath::from("/").trimmed(), "/");
        assert_eq!(RoutePath::from("/about/").trimmed(), "/about");
        assert_eq!(RoutePath::from("/about").trimmed(), "/about");
    }

    #[test]
    fn test_route_meta() {
        let route = Route::new("/facts", "PlanetFacts", "PlanetFactsView")
            .with_meta("title", "Planet Facts");

        assert_eq!(route.meta("title"), Some("Planet Facts"));
        assert_eq!(route.meta("missing"), None);
        assert_eq!(route.view.as_str(), "PlanetFactsView");
    }
}
