//! View layer for the terminal
//!
//! Maps the router's opaque view references to page renderers. A page
//! only announces which view is mounted; the views themselves live
//! elsewhere.

pub mod pages;

use colored::Colorize;
use orbit_core::{Location, Route, ViewRef};
use std::collections::HashMap;

/// Renders a mounted page to text
pub type PageRenderer = Box<dyn Fn(&Route, &Location) -> String>;

/// Renders text for a location that matched nothing
pub type FallbackRenderer = Box<dyn Fn(&str) -> String>;

/// Map of view references to their page renderers
pub struct ViewRegistry {
    pages: HashMap<ViewRef, PageRenderer>,
    fallback_page: Option<FallbackRenderer>,
}

impl ViewRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            fallback_page: None,
        }
    }

    /// Add a page renderer for a view
    pub fn page<F>(mut self, view: impl Into<ViewRef>, renderer: F) -> Self
    where
        F: Fn(&Route, &Location) -> String + 'static,
    {
        self.pages.insert(view.into(), Box::new(renderer));
        self
    }

    /// Set the page shown for unknown locations
    pub fn fallback<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.fallback_page = Some(Box::new(renderer));
        self
    }

    /// Render the page for a route
    pub fn render(&self, route: &Route, location: &Location) -> String {
        match self.pages.get(&route.view) {
            Some(renderer) => renderer(route, location),
            None => format!(
                "{} {} (no page registered for view '{}')",
                "▸".dimmed(),
                route.name.as_str().bold(),
                route.view
            ),
        }
    }

    /// Render the page for an unknown target
    pub fn render_not_found(&self, target: &str) -> String {
        match &self.fallback_page {
            Some(renderer) => renderer(target),
            None => format!("{} {}", "Route Not Found:".red().bold(), target),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}
