//! Resolve a target without navigating

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use orbit_core::{NavigationRequest, Router};
use tracing::info;

/// Print the route a path or name resolves to
pub async fn resolve_command(loader: CliConfigLoader, target: String) -> Result<()> {
    let loaded = loader.load().await?;
    let router = Router::new(loaded.table.into_router_config())
        .with_context(|| format!("Invalid route table: {}", loaded.source))?;

    let route = router.resolve(NavigationRequest::new(target.as_str()))?;
    info!(target_route = %route.name, "Resolved {}", target);

    println!("{}\t{}\t{}", route.path, route.name, route.view);
    Ok(())
}
