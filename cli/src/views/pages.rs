//! Placeholder pages for the planets views

use super::ViewRegistry;
use colored::Colorize;
use orbit_core::{Location, Route};

/// (view, blurb) for every planets view
const PLANET_VIEWS: &[(&str, &str)] = &[
    ("HomeView", "Pick a game or read about the planets."),
    ("AboutView", "Who made this and why."),
    ("MatchView", "Match each planet to its picture."),
    ("WordSearchView", "Find planet names hidden in the grid."),
    ("SortingGameView", "Put the planets in order from the Sun."),
    ("PlanetBuilder", "Build your own planet."),
    ("PlanetFactsView", "Facts about every planet."),
];

fn render_page(blurb: &'static str) -> impl Fn(&Route, &Location) -> String {
    move |route: &Route, location: &Location| {
        let title = route.meta("title").unwrap_or(route.name.as_str());
        format!(
            "{} {}  {}\n  {}",
            "▸".cyan(),
            title.bold(),
            location.to_string().dimmed(),
            blurb
        )
    }
}

/// Registry with a page for each planets view and a not-found page
pub fn planets() -> ViewRegistry {
    PLANET_VIEWS
        .iter()
        .fold(ViewRegistry::new(), |registry, &(view, blurb)| {
            registry.page(view, render_page(blurb))
        })
        .fallback(|target| {
            format!(
                "{} {}\n  Nothing lives at '{}'.",
                "▸".red(),
                "Page Not Found".red().bold(),
                target
            )
        })
}
