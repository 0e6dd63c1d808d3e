//! Host browsing context adapter
//!
//! The router reads its initial location from a [`HostHistory`] and writes
//! every committed navigation back to it, so whatever plays the role of
//! the address bar reflects the current path.

mod memory;

pub use memory::MemoryHistory;

/// The host side of navigation history
pub trait HostHistory {
    /// Path prefix the host adds in front of router paths (`""` for none)
    fn base(&self) -> &str;

    /// Full current location, base included
    fn location(&self) -> String;

    /// Record a new location
    fn push(&mut self, url: &str);

    /// Overwrite the current location
    fn replace(&mut self, url: &str);

    /// Move through host history; out of range moves are ignored
    fn go(&mut self, delta: isize);
}

/// Normalise a base: no trailing slash, `/` becomes empty
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Strip `base` from a host URL. Returns `None` when the URL lies
/// outside the base.
pub fn strip_base(base: &str, url: &str) -> Option<String> {
    let base = normalize_base(base);
    if base.is_empty() {
        return Some(url.to_string());
    }

    let rest = url.strip_prefix(base.as_str())?;
    if rest.starts_with('/') {
        Some(rest.to_string())
    } else if rest.is_empty() || rest.starts_with(['?', '#']) {
        Some(format!("/{}", rest))
    } else {
        // "/application" is not under "/app"
        None
    }
}

/// Prefix a router location with `base`
pub fn join_base(base: &str, location: &str) -> String {
    format!("{}{}", normalize_base(base), location)
}
