//! `revurl set-arg <url> <key> <value>` – set one query argument.

use anyhow::Result;
use revurl_core::query::combine_arg;
use revurl_core::value::ArgValue;

pub fn run_set_arg(url: &str, key: &str, value: &str) -> Result<()> {
    println!("{}", combine_arg(url, key, ArgValue::from(value)));
    Ok(())
}
