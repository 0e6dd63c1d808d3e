//! Navigation targets and parsed locations

use super::route::{RouteName, RoutePath};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A parsed location: `path[?query][#hash]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Location {
    /// Split a raw location string into path, query and hash.
    ///
    /// Empty query or hash parts (`/about?`) are dropped.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, non_empty(hash)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (rest, None),
        };

        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }

    /// Location for a registered route path
    pub fn for_path(path: &RoutePath) -> Self {
        Self {
            path: path.to_string(),
            query: None,
            hash: None,
        }
    }

    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.query = query;
        self
    }
}

fn non_empty(part: &str) -> Option<String> {
    (!part.is_empty()).then(|| part.to_string())
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}

/// What a navigation request points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A location matched against registered paths
    Path(Location),
    /// A route name looked up directly
    Name(RouteName),
}

impl Target {
    pub fn path(raw: &str) -> Self {
        Target::Path(Location::parse(raw))
    }

    pub fn name(name: impl Into<RouteName>) -> Self {
        Target::Name(name.into())
    }
}

/// Strings starting with `/` are paths, anything else is a route name
impl From<&str> for Target {
    fn from(raw: &str) -> Self {
        if raw.starts_with('/') {
            Target::path(raw)
        } else {
            Target::name(raw)
        }
    }
}

impl From<String> for Target {
    fn from(raw: String) -> Self {
        Target::from(raw.as_str())
    }
}

impl From<&RouteName> for Target {
    fn from(name: &RouteName) -> Self {
        Target::Name(name.clone())
    }
}

impl From<Location> for Target {
    fn from(location: Location) -> Self {
        Target::Path(location)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Path(location) => write!(f, "{}", location),
            Target::Name(name) => write!(f, "{}", name),
        }
    }
}

/// A navigation request with optional params and query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: Target,
    /// Path params. Literal routes declare none, so these are discarded.
    pub params: BTreeMap<String, String>,
    /// Query string applied to name targets
    pub query: Option<String>,
}

impl NavigationRequest {
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            params: BTreeMap::new(),
            query: None,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

impl From<Target> for NavigationRequest {
    fn from(target: Target) -> Self {
        NavigationRequest::new(target)
    }
}

impl From<&str> for NavigationRequest {
    fn from(raw: &str) -> Self {
        NavigationRequest::new(raw)
    }
}

impl From<String> for NavigationRequest {
    fn from(raw: String) -> Self {
        NavigationRequest::new(raw)
    }
}

impl From<&RouteName> for NavigationRequest {
    fn from(name: &RouteName) -> Self {
        NavigationRequest::new(name)
    }
}

impl From<Location> for NavigationRequest {
    fn from(location: Location) -> Self {
        NavigationRequest::new(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let location = Location::parse("/about?tab=team#contact");
        assert_eq!(location.path, "/about");
        assert_eq!(location.query.as_deref(), Some("tab=team"));
        assert_eq!(location.hash.as_deref(), Some("contact"));
        assert_eq!(location.to_string(), "/about?tab=team#contact");

        let location = Location::parse("/facts#mars?x");
        assert_eq!(location.path, "/facts");
        assert_eq!(location.query, None);
        assert_eq!(location.hash.as_deref(), Some("mars?x"));

        let location = Location::parse("/sort?");
        assert_eq!(location.path, "/sort");
        assert_eq!(location.query, None);
        assert_eq!(location.to_string(), "/sort");
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!(Target::from("/about"), Target::path("/about"));
        assert_eq!(Target::from("About"), Target::name("About"));
        assert_eq!(Target::from(""), Target::name(""));
    }

    #[test]
    fn test_request_builder() {
        let request = NavigationRequest::new("PlanetFacts")
            .with_param("planet", "mars")
            .with_query("lang=en");

        assert_eq!(request.target, Target::name("PlanetFacts"));
        assert_eq!(request.params.get("planet").map(String::as_str), Some("mars"));
        assert_eq!(request.query.as_deref(), Some("lang=en"));
    }
}
