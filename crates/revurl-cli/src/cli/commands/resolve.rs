//! `revurl resolve <name> [args…]` – resolve a named route.

use anyhow::Result;
use revurl_core::registry::RouteRegistry;
use revurl_core::value::ArgValue;

pub fn run_resolve(registry: &RouteRegistry, name: &str, args: &[String]) -> Result<()> {
    let args: Vec<ArgValue> = args.iter().map(|a| ArgValue::from(a.as_str())).collect();
    match registry.resolve(name, &args) {
        Some(path) => {
            println!("{path}");
            Ok(())
        }
        None => anyhow::bail!("unknown route: {name}"),
    }
}
