//! In-process host history

use super::{normalize_base, HostHistory};

/// Host history kept in memory, for tests and non-browser hosts
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    base: String,
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    /// Create a history positioned at the base root
    pub fn new(base: &str) -> Self {
        let base = normalize_base(base);
        let root = if base.is_empty() {
            "/".to_string()
        } else {
            base.clone()
        };

        Self {
            base,
            entries: vec![root],
            position: 0,
        }
    }

    /// Start at a specific host location (base included)
    pub fn with_location(mut self, url: impl Into<String>) -> Self {
        self.entries = vec![url.into()];
        self.position = 0;
        self
    }

    /// All host locations, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HostHistory for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> String {
        self.entries[self.position].clone()
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.position + 1);
        self.entries.push(url.to_string());
        self.position = self.entries.len() - 1;
    }

    fn replace(&mut self, url: &str) {
        self.entries[self.position] = url.to_string();
    }

    fn go(&mut self, delta: isize) {
        if let Some(target) = self.position.checked_add_signed(delta) {
            if target < self.entries.len() {
                self.position = target;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_history() {
        let mut history = MemoryHistory::new("/app");
        assert_eq!(history.location(), "/app");
        assert_eq!(history.base(), "/app");

        history.push("/app/about");
        history.push("/app/facts");
        history.go(-1);
        assert_eq!(history.location(), "/app/about");

        history.push("/app/sort");
        assert_eq!(history.entries(), &["/app", "/app/about", "/app/sort"]);

        history.replace("/app/match");
        assert_eq!(history.location(), "/app/match");

        history.go(10);
        assert_eq!(history.location(), "/app/match");
    }

    #[test]
    fn test_with_location() {
        let history = MemoryHistory::default().with_location("/about");
        assert_eq!(history.location(), "/about");
        assert_eq!(history.base(), "");
    }
}
