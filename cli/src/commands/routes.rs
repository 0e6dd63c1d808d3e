//! List the route table

use crate::config::CliConfigLoader;
use crate::session::describe_routes;
use anyhow::{Context, Result};
use colored::Colorize;
use orbit_core::Router;

/// Print the route table, validating it first
pub async fn routes_command(loader: CliConfigLoader, json: bool) -> Result<()> {
    let loaded = loader.load().await?;

    // Building the router validates paths and uniqueness
    let router = Router::new(loaded.table.clone().into_router_config())
        .with_context(|| format!("Invalid route table: {}", loaded.source))?;

    if json {
        println!("{}", loaded.table.to_json()?);
        return Ok(());
    }

    println!("{} {}", "Routes from".bold(), loaded.source);
    for line in describe_routes(&router) {
        println!("  {}", line);
    }
    if let Some(fallback) = router.fallback() {
        println!("{} {}", "Fallback:".dimmed(), fallback.name);
    }

    Ok(())
}
