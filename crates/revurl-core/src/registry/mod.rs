//! Named-route registry and template resolution.
//!
//! Templates use `*` as the sole placeholder token, filled positionally at
//! resolution time. The registry is built once from the route manifest (or
//! by explicit `register` calls during startup) and read-only afterwards.

mod template;

pub use template::fill_template;

use std::collections::BTreeMap;

use crate::config::RouteManifest;
use crate::value::ArgValue;

/// Read-only mapping from route name to URL template.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: BTreeMap<String, String>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a loaded manifest.
    pub fn from_manifest(manifest: &RouteManifest) -> Self {
        let mut registry = Self::new();
        for (name, template) in &manifest.routes {
            registry.register(name, template);
        }
        registry
    }

    /// Registers `template` under `name`. Registering the same name twice
    /// keeps the last template. There is no removal; the registry only
    /// grows during initialization.
    pub fn register(&mut self, name: &str, template: &str) {
        self.routes.insert(name.to_string(), template.to_string());
    }

    /// Resolves a route name into a concrete path.
    ///
    /// Returns `None` for an unknown name (callers must branch on this, it
    /// is not an error). Placeholders are filled left to right with the
    /// string form of each argument; if the arguments run out, the
    /// remaining `*` tokens stay in the output verbatim, and surplus
    /// arguments are ignored.
    pub fn resolve(&self, name: &str, args: &[ArgValue]) -> Option<String> {
        let template = self.routes.get(name)?;
        Some(fill_template(template, args))
    }

    /// Raw template for `name`, if registered.
    pub fn template(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// Iterates registered routes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|(name, template)| (name.as_str(), template.as_str()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
