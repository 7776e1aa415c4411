//! `revurl routes` – list the routes in the manifest.

use anyhow::Result;
use revurl_core::registry::RouteRegistry;

pub fn run_routes(registry: &RouteRegistry) -> Result<()> {
    if registry.is_empty() {
        println!("No routes in manifest.");
    } else {
        println!("{:<30} {}", "NAME", "TEMPLATE");
        for (name, template) in registry.iter() {
            println!("{:<30} {}", name, template);
        }
    }
    Ok(())
}
