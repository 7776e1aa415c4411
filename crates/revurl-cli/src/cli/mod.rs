//! CLI for the revurl route and query-string tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use revurl_core::config;
use revurl_core::registry::RouteRegistry;
use std::path::{Path, PathBuf};

use commands::{run_append_args, run_get_param, run_resolve, run_routes, run_set_arg};

/// Top-level CLI for revurl.
#[derive(Debug, Parser)]
#[command(name = "revurl")]
#[command(about = "revurl: named-route URL reversal and query-string tools", long_about = None)]
pub struct Cli {
    /// Route manifest to use instead of the XDG config location.
    #[arg(long, global = true, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the routes in the manifest.
    Routes,

    /// Resolve a named route with positional arguments.
    Resolve {
        /// Route name, e.g. "shop.product".
        name: String,
        /// Positional arguments substituted for `*` placeholders, in order.
        args: Vec<String>,
    },

    /// Set (or replace) a single query argument on a URL.
    SetArg {
        /// URL or path to modify.
        url: String,
        /// Query argument key.
        key: String,
        /// Query argument value (inserted as-is, no encoding).
        value: String,
    },

    /// Append a pre-encoded query fragment ("a=1&b=2") to a URL.
    AppendArgs {
        /// URL or path to modify.
        url: String,
        /// Raw fragment appended after the `?`/`&` separator.
        raw: String,
    },

    /// Print the decoded value of a query parameter in a URL.
    GetParam {
        /// URL or query string to inspect.
        url: String,
        /// Parameter name.
        name: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run(cli.manifest.as_deref())
    }

    fn run(&self, manifest: Option<&Path>) -> Result<()> {
        match self {
            CliCommand::Routes => run_routes(&load_registry(manifest)?),
            CliCommand::Resolve { name, args } => {
                run_resolve(&load_registry(manifest)?, name, args)
            }
            CliCommand::SetArg { url, key, value } => run_set_arg(url, key, value),
            CliCommand::AppendArgs { url, raw } => run_append_args(url, raw),
            CliCommand::GetParam { url, name } => run_get_param(url, name),
        }
    }
}

/// Builds the registry from `--manifest` when given, the XDG manifest
/// otherwise (created empty on first run).
fn load_registry(path: Option<&Path>) -> Result<RouteRegistry> {
    let manifest = match path {
        Some(p) => config::load_from_path(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("registry holds {} routes", manifest.routes.len());
    Ok(RouteRegistry::from_manifest(&manifest))
}

#[cfg(test)]
mod tests;
