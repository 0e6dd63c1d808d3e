//! Route table loader for orbit
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./orbit.json or ./.orbit/routes.json
//! 3. Git repository root: <repo_root>/.orbit/routes.json
//! 4. User config: $XDG_CONFIG_HOME/orbit/routes.json or ~/.config/orbit/routes.json
//! 5. Built-in planets table (no files)

use anyhow::{anyhow, Context, Result};
use orbit_core::{RouteTableFile, TrailingSlash};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the route table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::File(path) => write!(f, "{}", path.display()),
            TableSource::Builtin => f.write_str("built-in planets table"),
        }
    }
}

/// A route table with flag overrides applied
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: RouteTableFile,
    pub source: TableSource,
}

/// CLI route table loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Directory searched first, defaults to the current directory
    working_dir: Option<PathBuf>,
    /// Flag overrides
    base_override: Option<String>,
    max_history_override: Option<usize>,
    lenient_slashes: bool,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            working_dir: None,
            base_override: None,
            max_history_override: None,
            lenient_slashes: false,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Search from this directory instead of the current one
    pub fn with_working_dir(mut self, path: PathBuf) -> Self {
        self.working_dir = Some(path);
        self
    }

    /// Set host base override
    pub fn with_base_override(mut self, base: String) -> Self {
        self.base_override = Some(base);
        self
    }

    /// Set history size override
    pub fn with_max_history_override(mut self, max_history: usize) -> Self {
        self.max_history_override = Some(max_history);
        self
    }

    /// Match paths ignoring trailing slashes
    pub fn with_lenient_slashes(mut self, lenient: bool) -> Self {
        self.lenient_slashes = lenient;
        self
    }

    /// Load the route table and apply overrides
    pub async fn load(&self) -> Result<LoadedTable> {
        // Step 1: Find and load base table
        let (mut table, source) = if let Some(override_path) = &self.config_override {
            let path = expand_path(override_path);
            let (table, file) = self.load_from_path(&path).await.with_context(|| {
                format!(
                    "Failed to load route table from override path: {}",
                    override_path.display()
                )
            })?;
            (table, TableSource::File(file))
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(base) = &self.base_override {
            table.base = base.clone();
        }
        if let Some(max_history) = self.max_history_override {
            table.max_history = max_history;
        }
        if self.lenient_slashes {
            table.trailing_slash = TrailingSlash::Lenient;
        }

        debug!(source = %source, routes = table.routes.len(), "Route table loaded");
        Ok(LoadedTable { table, source })
    }

    /// Search for a table in priority order
    async fn search_and_load(&self) -> Result<(RouteTableFile, TableSource)> {
        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let mut candidates = vec![
            cwd.join("orbit.json"),
            cwd.join(".orbit").join("routes.json"),
        ];
        if let Some(git_root) = find_git_root(&cwd) {
            candidates.push(git_root.join(".orbit").join("routes.json"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("orbit").join("routes.json"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                let table = self.load_file(&candidate).await?;
                return Ok((table, TableSource::File(candidate)));
            }
        }

        Ok((RouteTableFile::planets(), TableSource::Builtin))
    }

    /// Load a table from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<(RouteTableFile, PathBuf)> {
        if path.is_file() {
            Ok((self.load_file(path).await?, path.to_path_buf()))
        } else if path.is_dir() {
            let table_file = path.join("routes.json");
            if table_file.exists() {
                Ok((self.load_file(&table_file).await?, table_file))
            } else {
                Err(anyhow!(
                    "No routes.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single table file
    async fn load_file(&self, path: &Path) -> Result<RouteTableFile> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read route table: {}", path.display()))?;

        RouteTableFile::from_json(&content)
            .with_context(|| format!("Failed to parse route table: {}", path.display()))
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand `~` and environment variables in a user-supplied path
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

/// Find git repository root
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}
