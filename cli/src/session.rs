//! Navigation session: a router, its host history and the mounted view layer

use crate::config::LoadedTable;
use crate::views::ViewRegistry;
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use orbit_core::{
    MemoryHistory, NavigationError, NavigationRequest, RouteChanged, Router, Status,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, warn};

/// One command understood by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Push navigation to a path or route name
    Go(String),
    /// Replace the current entry
    Replace(String),
    Back,
    Forward,
    /// Move through history by a signed offset
    Delta(isize),
    Current,
    History,
    Routes,
    Help,
    Quit,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let step = match (command, rest) {
            ("", _) => return Err(anyhow!("Empty command")),
            ("back" | "b", "") => Step::Back,
            ("forward" | "f", "") => Step::Forward,
            ("current" | "c", "") => Step::Current,
            ("history" | "h", "") => Step::History,
            ("routes" | "r", "") => Step::Routes,
            ("help" | "?", "") => Step::Help,
            ("quit" | "exit" | "q", "") => Step::Quit,
            ("go", "") | ("replace", "") => {
                return Err(anyhow!("'{}' needs a path or route name", command))
            }
            ("go", target) => match target.parse::<isize>() {
                Ok(delta) => Step::Delta(delta),
                Err(_) => Step::Go(target.to_string()),
            },
            ("replace", target) => Step::Replace(target.to_string()),
            (target, "") => Step::Go(target.to_string()),
            _ => return Err(anyhow!("Unknown command: {}", line)),
        };

        Ok(step)
    }
}

/// Whether typing `name` on its own runs a command instead of navigating
pub fn shadows_command(name: &str) -> bool {
    !matches!(name.parse::<Step>(), Ok(Step::Go(_)))
}

pub const HELP: &str = "\
Commands:
  <path>|<name>      navigate (e.g. /about, PlanetFacts)
  go <target>|<n>    navigate, or move n entries through history
                     (use `go <name>` for a route named like a command)
  replace <target>   navigate without adding a history entry
  back, forward      traverse history
  current            show the active route
  history            show navigation history
  routes             list the route table
  quit               leave";

/// Result of running one step
#[derive(Debug, Default)]
pub struct StepOutput {
    pub lines: Vec<String>,
    pub quit: bool,
}

/// A router with its view layer mounted
pub struct Session {
    router: Router,
    views: Rc<ViewRegistry>,
    mounted: Rc<RefCell<Vec<String>>>,
}

impl Session {
    /// Build the router from a loaded table and perform the initial
    /// navigation from `start` (a host location, base included).
    pub fn new(loaded: &LoadedTable, views: ViewRegistry, start: Option<&str>) -> Result<Self> {
        let table = &loaded.table;
        let mut host = MemoryHistory::new(&table.base);
        if let Some(start) = start {
            host = host.with_location(start);
        }

        let mut router = Router::new(table.clone().into_router_config())
            .with_context(|| format!("Invalid route table: {}", loaded.source))?
            .with_host(host);

        for route in router.routes() {
            if shadows_command(route.name.as_str()) {
                warn!(
                    route = %route.name,
                    "Route name is also a shell command, reach it with `go {}`",
                    route.name
                );
            }
        }

        let views = Rc::new(views);
        let mounted = Rc::new(RefCell::new(Vec::new()));
        {
            let views = Rc::clone(&views);
            let mounted = Rc::clone(&mounted);
            router.subscribe(move |event: &RouteChanged| {
                mounted
                    .borrow_mut()
                    .push(views.render(&event.to, &event.location));
            });
        }

        let mut session = Self {
            router,
            views,
            mounted,
        };

        if let Err(err) = session.router.start() {
            debug!(error = %err, "Initial navigation failed");
            let location = session
                .router
                .host()
                .map(|host| host.location())
                .unwrap_or_default();
            let page = session.views.render_not_found(&location);
            session.mounted.borrow_mut().push(page);
        }

        Ok(session)
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Pages mounted since the last call
    pub fn take_mounted(&mut self) -> Vec<String> {
        self.mounted.borrow_mut().drain(..).collect()
    }

    /// Run one step and collect what it printed
    pub fn run(&mut self, step: Step) -> StepOutput {
        let mut output = StepOutput::default();

        let navigation = match step {
            Step::Go(target) => Some(self.router.navigate(target_request(&target)).map(|_| ())),
            Step::Replace(target) => {
                Some(self.router.replace(target_request(&target)).map(|_| ()))
            }
            Step::Back => Some(self.router.back().map(|_| ())),
            Step::Forward => Some(self.router.forward().map(|_| ())),
            Step::Delta(delta) => Some(self.router.go(delta).map(|_| ())),
            Step::Current => {
                output.lines.push(self.describe_current());
                None
            }
            Step::History => {
                output.lines.extend(self.describe_history());
                None
            }
            Step::Routes => {
                output.lines.extend(describe_routes(&self.router));
                None
            }
            Step::Help => {
                output.lines.push(HELP.to_string());
                None
            }
            Step::Quit => {
                output.quit = true;
                None
            }
        };

        if let Some(Err(err)) = navigation {
            output.lines.push(self.describe_error(&err));
        }
        output.lines.extend(self.take_mounted());
        output
    }

    fn describe_error(&self, err: &NavigationError) -> String {
        match err {
            NavigationError::NotFound { target } => self.views.render_not_found(target),
            NavigationError::NoHistory => format!("{}", "Nothing to go back to".yellow()),
            NavigationError::NoForwardHistory => {
                format!("{}", "Nothing to go forward to".yellow())
            }
        }
    }

    fn describe_current(&self) -> String {
        match (self.router.current(), self.router.current_location()) {
            (Some(route), Some(location)) => format!(
                "{} {} -> {}",
                location,
                format!("({})", route.name).dimmed(),
                route.view
            ),
            _ => match self.router.status() {
                Status::Unresolved => "No active route".to_string(),
                Status::Resolved => "Active route is no longer registered".to_string(),
            },
        }
    }

    fn describe_history(&self) -> Vec<String> {
        let position = self.router.state().position();
        self.router
            .history()
            .enumerate()
            .map(|(index, entry)| {
                let marker = if Some(index) == position { "*" } else { " " };
                format!(
                    "{} {:>2}. {} {} {}",
                    marker,
                    index + 1,
                    entry.location,
                    format!("({})", entry.route).dimmed(),
                    entry.visited_at.format("%H:%M:%S").to_string().dimmed()
                )
            })
            .collect()
    }
}

/// Parse a CLI target; strings starting with `/` are paths, others names
fn target_request(target: &str) -> NavigationRequest {
    NavigationRequest::new(target)
}

/// One line per route in registration order
pub fn describe_routes(router: &Router) -> Vec<String> {
    let width = router
        .routes()
        .iter()
        .map(|route| route.path.as_str().len())
        .max()
        .unwrap_or(0);

    router
        .routes()
        .iter()
        .map(|route| {
            format!(
                "{:<width$}  {:<16} {}",
                route.path.as_str(),
                route.name.as_str(),
                route.view.as_str().dimmed(),
                width = width
            )
        })
        .collect()
}
