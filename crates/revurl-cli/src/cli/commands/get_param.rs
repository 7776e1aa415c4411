//! `revurl get-param <url> <name>` – print a decoded query parameter.

use anyhow::Result;
use revurl_core::query::get_query_param;

pub fn run_get_param(url: &str, name: &str) -> Result<()> {
    // Absent parameters print an empty line, mirroring the library contract.
    println!("{}", get_query_param(url, name));
    Ok(())
}
