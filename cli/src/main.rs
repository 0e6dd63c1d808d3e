//! # orbit CLI
//!
//! Command-line interface for Orbit - a declarative client-side router.
//!
//! ## Usage
//!
//! - `orbit` - Start the interactive navigation shell
//! - `orbit routes` - Show the route table
//! - `orbit resolve /about` - Resolve a path or route name
//! - `orbit visit /about PlanetFacts back` - Run a navigation sequence
//!
//! Without a route table file the built-in planets table is used.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod session;
mod views;

use commands::{interactive_command, resolve_command, routes_command, visit_command};
use config::CliConfigLoader;

/// orbit - A declarative, history-aware client-side router
#[derive(Parser)]
#[command(name = "orbit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive a client-side router over a route table")]
#[command(long_about = None)]
struct Cli {
    /// Route table file or directory path
    #[arg(short, long, env = "ORBIT_CONFIG")]
    config: Option<PathBuf>,

    /// Directory to search for a route table instead of the current one
    #[arg(long)]
    working_dir: Option<PathBuf>,

    /// Host base path override (e.g. /app)
    #[arg(long)]
    base: Option<String>,

    /// Maximum number of history entries behind the current one
    #[arg(long)]
    max_history: Option<usize>,

    /// Treat `/about/` and `/about` as the same path
    #[arg(long)]
    lenient_slashes: bool,

    /// Initial host location, base included (defaults to the base root)
    #[arg(long)]
    start: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route table
    Routes {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a path or route name without navigating
    Resolve {
        /// Path (starting with '/') or route name
        target: String,
    },

    /// Apply navigation steps in order (paths, names, back, forward, ...)
    Visit {
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
    },
}

/// Build a route table loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(working_dir) = &cli.working_dir {
        loader = loader.with_working_dir(working_dir.clone());
    }

    if let Some(base) = &cli.base {
        loader = loader.with_base_override(base.clone());
    }

    if let Some(max_history) = cli.max_history {
        loader = loader.with_max_history_override(max_history);
    }

    loader.with_lenient_slashes(cli.lenient_slashes)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    // Build route table loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes { json }) => routes_command(config_loader, json).await,
        Some(Commands::Resolve { target }) => resolve_command(config_loader, target).await,
        Some(Commands::Visit { steps }) => visit_command(config_loader, steps, cli.start).await,
        // Default to interactive mode
        None => interactive_command(config_loader, cli.start).await,
    }
}
