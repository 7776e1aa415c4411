use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Route manifest loaded from `~/.config/revurl/routes.toml`.
///
/// Server-side route configuration is exported in this shape; the
/// `RouteRegistry` is built from it once at startup.
///
/// ```toml
/// [routes]
/// "shop.product" = "/shop/product/*/"
/// "shop.category" = "/shop/*/page/*/"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteManifest {
    /// Route name to URL template (`*` placeholders, filled positionally).
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
}

/// Failure loading a route manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn manifest_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("revurl")?;
    Ok(xdg_dirs.place_config_file("routes.toml")?)
}

/// Load a manifest from an explicit path.
pub fn load_from_path(path: &Path) -> Result<RouteManifest, ManifestError> {
    let data = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the manifest from the XDG config location, creating an empty one if
/// none exists yet.
pub fn load_or_init() -> Result<RouteManifest> {
    let path = manifest_path()?;
    if !path.exists() {
        let default_manifest = RouteManifest::default();
        let toml = toml::to_string_pretty(&default_manifest)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created empty route manifest at {}", path.display());
        return Ok(default_manifest);
    }

    let manifest = load_from_path(&path)?;
    tracing::debug!(
        "loaded {} routes from {}",
        manifest.routes.len(),
        path.display()
    );
    Ok(manifest)
}
