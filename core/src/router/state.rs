//! Navigation state: the active entry and the history stack around it

use super::location::Location;
use super::route::RouteName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Default number of entries kept behind the current one
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// A visited location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique key for this visit
    pub key: Uuid,
    /// Location as requested, including query and hash
    pub location: Location,
    /// Route the location resolved to
    pub route: RouteName,
    /// When the entry was created
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(location: Location, route: RouteName) -> Self {
        Self {
            key: Uuid::new_v4(),
            location,
            route,
            visited_at: Utc::now(),
        }
    }
}

/// Whether the router has an active route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No navigation has succeeded yet
    Unresolved,
    /// The current entry points at a registered route
    Resolved,
}

/// Browser-like history: entries oldest first with a cursor on the
/// current one. Entries after the cursor are forward history.
#[derive(Debug, Clone)]
pub struct NavigationState {
    entries: VecDeque<HistoryEntry>,
    cursor: Option<usize>,
    max_history: usize,
}

impl NavigationState {
    /// Create an unresolved state keeping at most `max_history` entries
    /// behind the current one
    pub fn new(max_history: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            max_history,
        }
    }

    pub fn status(&self) -> Status {
        if self.cursor.is_some() {
            Status::Resolved
        } else {
            Status::Unresolved
        }
    }

    /// The current entry
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    /// Path of the current entry
    pub fn current_path(&self) -> Option<&str> {
        self.current().map(|entry| entry.location.path.as_str())
    }

    /// Push a new entry, dropping any forward history
    pub fn push(&mut self, entry: HistoryEntry) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push_back(entry);

        // Trim history if it exceeds max size
        while self.entries.len() > self.max_history + 1 {
            self.entries.pop_front();
        }

        self.cursor = Some(self.entries.len() - 1);
    }

    /// Insert an entry before the oldest one and make it current.
    ///
    /// Used when the host moves back past the retained window. Forward
    /// entries beyond the size limit are dropped from the newest end.
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.max_history + 1 {
            self.entries.pop_back();
        }
        self.cursor = Some(0);
    }

    /// Replace the current entry, or push when there is none
    pub fn replace(&mut self, entry: HistoryEntry) {
        match self.cursor.and_then(|cursor| self.entries.get_mut(cursor)) {
            Some(current) => *current = entry,
            None => self.push(entry),
        }
    }

    /// Entry `delta` steps away from the current one
    pub fn peek(&self, delta: isize) -> Option<&HistoryEntry> {
        let cursor = self.cursor?;
        let target = cursor.checked_add_signed(delta)?;
        self.entries.get(target)
    }

    /// Move the cursor by `delta`. Returns `None` and leaves the state
    /// untouched when no entry exists there.
    pub fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        let cursor = self.cursor?;
        let target = cursor.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.cursor = Some(target);
        self.entries.get(target)
    }

    pub fn can_go_back(&self) -> bool {
        self.peek(-1).is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.peek(1).is_some()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Index of the current entry within `entries`
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> HistoryEntry {
        HistoryEntry::new(Location::parse(path), RouteName::from(path))
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::default();
        assert_eq!(state.status(), Status::Unresolved);
        assert!(state.current().is_none());
        assert!(!state.can_go_back());
        assert!(!state.can_go_forward());
    }

    #[test]
    fn test_push_and_go() {
        let mut state = NavigationState::default();
        state.push(entry("/"));
        state.push(entry("/about"));
        state.push(entry("/facts"));

        assert_eq!(state.status(), Status::Resolved);
        assert_eq!(state.current_path(), Some("/facts"));

        assert_eq!(state.go(-2).map(|e| e.location.path.clone()), Some("/".to_string()));
        assert!(!state.can_go_back());
        assert!(state.can_go_forward());

        // Out of range leaves the cursor where it is
        assert!(state.go(-1).is_none());
        assert!(state.go(5).is_none());
        assert_eq!(state.current_path(), Some("/"));
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut state = NavigationState::default();
        state.push(entry("/"));
        state.push(entry("/about"));
        state.go(-1);
        state.push(entry("/sort"));

        let paths: Vec<_> = state.entries().map(|e| e.location.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/sort"]);
        assert!(!state.can_go_forward());
    }

    #[test]
    fn test_replace() {
        let mut state = NavigationState::default();
        state.replace(entry("/"));
        assert_eq!(state.len(), 1);

        state.push(entry("/about"));
        state.replace(entry("/match"));
        assert_eq!(state.len(), 2);
        assert_eq!(state.current_path(), Some("/match"));
        assert_eq!(state.peek(-1).map(|e| e.location.path.as_str()), Some("/"));
    }

    #[test]
    fn test_history_limit() {
        let mut state = NavigationState::new(2);
        for path in ["/a", "/b", "/c", "/d"] {
            state.push(entry(path));
        }

        let paths: Vec<_> = state.entries().map(|e| e.location.path.as_str()).collect();
        assert_eq!(paths, vec!["/b", "/c", "/d"]);
        assert_eq!(state.position(), Some(2));
    }

    #[test]
    fn test_prepend_before_window() {
        let mut state = NavigationState::new(1);
        state.push(entry("/about"));
        state.push(entry("/match"));
        state.go(-1);
        state.prepend(entry("/"));

        let paths: Vec<_> = state.entries().map(|e| e.location.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about"]);
        assert_eq!(state.position(), Some(0));
        assert!(state.can_go_forward());
    }

    #[test]
    fn test_history_disabled() {
        let mut state = NavigationState::new(0);
        state.push(entry("/"));
        state.push(entry("/about"));

        assert_eq!(state.len(), 1);
        assert!(!state.can_go_back());
        assert_eq!(state.current_path(), Some("/about"));
    }
}
