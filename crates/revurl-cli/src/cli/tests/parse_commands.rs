//! Parse tests for routes, resolve, set-arg, append-args, get-param.

use std::path::PathBuf;

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_routes() {
    match parse(&["revurl", "routes"]).command {
        CliCommand::Routes => {}
        _ => panic!("expected Routes"),
    }
}

#[test]
fn cli_parse_resolve_with_args() {
    match parse(&["revurl", "resolve", "shop.page", "garden", "2"]).command {
        CliCommand::Resolve { name, args } => {
            assert_eq!(name, "shop.page");
            assert_eq!(args, vec!["garden".to_string(), "2".to_string()]);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_without_args() {
    match parse(&["revurl", "resolve", "home"]).command {
        CliCommand::Resolve { name, args } => {
            assert_eq!(name, "home");
            assert!(args.is_empty());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_set_arg() {
    match parse(&["revurl", "set-arg", "/x?a=1", "page", "2"]).command {
        CliCommand::SetArg { url, key, value } => {
            assert_eq!(url, "/x?a=1");
            assert_eq!(key, "page");
            assert_eq!(value, "2");
        }
        _ => panic!("expected SetArg"),
    }
}

#[test]
fn cli_parse_append_args() {
    match parse(&["revurl", "append-args", "/x", "a=1&b=2"]).command {
        CliCommand::AppendArgs { url, raw } => {
            assert_eq!(url, "/x");
            assert_eq!(raw, "a=1&b=2");
        }
        _ => panic!("expected AppendArgs"),
    }
}

#[test]
fn cli_parse_get_param() {
    match parse(&["revurl", "get-param", "?q=hello+world", "q"]).command {
        CliCommand::GetParam { url, name } => {
            assert_eq!(url, "?q=hello+world");
            assert_eq!(name, "q");
        }
        _ => panic!("expected GetParam"),
    }
}

#[test]
fn cli_parse_global_manifest_flag() {
    let cli = parse(&["revurl", "routes", "--manifest", "/tmp/routes.toml"]);
    assert_eq!(cli.manifest, Some(PathBuf::from("/tmp/routes.toml")));
}
