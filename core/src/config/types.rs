//! Route table file types
//!
//! Core only accepts a fully parsed table. Discovery, loading and flag
//! overrides happen in the CLI layer.

use crate::error::Result;
use crate::router::{Route, RouteName, RouterConfig, TrailingSlash, DEFAULT_MAX_HISTORY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One route entry in a route table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub path: String,
    pub name: String,
    pub view: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl From<RouteSpec> for Route {
    fn from(spec: RouteSpec) -> Self {
        let mut route = Route::new(spec.path, spec.name, spec.view);
        route.meta = spec.meta;
        route
    }
}

/// Route table file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTableFile {
    /// Path prefix the host adds in front of router paths
    #[serde(default = "default_base")]
    pub base: String,
    /// Maximum number of entries kept behind the current one
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Path matching mode
    #[serde(default)]
    pub trailing_slash: TrailingSlash,
    /// Route mounted at startup when the initial location matches nothing
    #[serde(default)]
    pub fallback: Option<String>,
    /// Routes in registration order
    pub routes: Vec<RouteSpec>,
}

fn default_base() -> String {
    "/".to_string()
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

fn spec(path: &str, name: &str, view: &str, title: &str) -> RouteSpec {
    RouteSpec {
        path: path.to_string(),
        name: name.to_string(),
        view: view.to_string(),
        meta: BTreeMap::from([("title".to_string(), title.to_string())]),
    }
}

impl RouteTableFile {
    /// The built-in planets application table
    pub fn planets() -> Self {
        Self {
            base: default_base(),
            max_history: DEFAULT_MAX_HISTORY,
            trailing_slash: TrailingSlash::Strict,
            fallback: Some("Home".to_string()),
            routes: vec![
                spec("/", "Home", "HomeView", "Home"),
                spec("/about", "About", "AboutView", "About"),
                spec("/match", "PlanetMatch", "MatchView", "Planet Match"),
                spec("/wordsearch", "WordSearch", "WordSearchView", "Word Search"),
                spec("/sort", "SortingGame", "SortingGameView", "Sorting Game"),
                spec("/planetbuilder", "PlanetBuilder", "PlanetBuilder", "Planet Builder"),
                spec("/facts", "PlanetFacts", "PlanetFactsView", "Planet Facts"),
            ],
        }
    }

    /// Parse a table from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a table from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Turn the table into a router configuration.
    ///
    /// Validation (duplicates, path shape) happens when the router is built.
    pub fn into_router_config(self) -> RouterConfig {
        let mut config = RouterConfig::new()
            .with_routes(self.routes.into_iter().map(Route::from))
            .with_max_history(self.max_history)
            .with_trailing_slash(self.trailing_slash);
        if let Some(fallback) = self.fallback {
            config.fallback = Some(RouteName::from(fallback));
        }
        config
    }
}

impl Default for RouteTableFile {
    fn default() -> Self {
        Self::planets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, Error};
    use crate::router::Router;
    use tempfile::tempdir;

    #[test]
    fn test_planets_table_registers() {
        let router = Router::new(RouteTableFile::planets().into_router_config())
            .expect("Failed to create router");

        assert_eq!(router.routes().len(), 7);
        assert_eq!(router.fallback().map(|r| r.name.as_str()), Some("Home"));
        assert_eq!(
            router.route("PlanetBuilder").and_then(|r| r.meta("title")),
            Some("Planet Builder")
        );
    }

    #[test]
    fn test_defaults_when_parsing() {
        let table = RouteTableFile::from_json(
            r#"{ "routes": [ { "path": "/", "name": "Home", "view": "HomeView" } ] }"#,
        )
        .expect("Failed to parse");

        assert_eq!(table.base, "/");
        assert_eq!(table.max_history, DEFAULT_MAX_HISTORY);
        assert_eq!(table.trailing_slash, TrailingSlash::Strict);
        assert!(table.fallback.is_none());
        assert!(table.routes[0].meta.is_empty());
    }

    #[test]
    fn test_trailing_slash_parsing() {
        let table = RouteTableFile::from_json(
            r#"{ "trailing_slash": "lenient", "routes": [] }"#,
        )
        .expect("Failed to parse");
        assert_eq!(table.trailing_slash, TrailingSlash::Lenient);

        assert!(matches!(
            RouteTableFile::from_json(r#"{ "trailing_slash": "loose", "routes": [] }"#),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, RouteTableFile::planets().to_json().unwrap()).unwrap();

        let table = RouteTableFile::from_file(&path).expect("Failed to load");
        assert_eq!(table, RouteTableFile::planets());
    }

    #[test]
    fn test_duplicates_fail_at_router_build() {
        let mut table = RouteTableFile::planets();
        table.routes.push(spec("/facts", "MoreFacts", "PlanetFactsView", "More"));

        assert!(matches!(
            Router::new(table.into_router_config()),
            Err(ConfigurationError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            RouteTableFile::from_file(dir.path().join("nope.json")),
            Err(Error::Io(_))
        ));
    }
}
