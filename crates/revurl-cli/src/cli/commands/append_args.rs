//! `revurl append-args <url> <raw>` – append a pre-encoded fragment.

use anyhow::Result;
use revurl_core::query::combine_args;

pub fn run_append_args(url: &str, raw: &str) -> Result<()> {
    println!("{}", combine_args(url, raw));
    Ok(())
}
