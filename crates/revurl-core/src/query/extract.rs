//! Query parameter extraction.

use regex::Regex;

use super::decode::decode_component;

/// Returns the decoded value of the query parameter `name` within
/// `location` (a full URL or a bare `?...` query string), or `""` when the
/// parameter is absent.
///
/// Only `[` and `]` are escaped in `name` before the lookup, so
/// array-style field names (`items[]`) match literally; other regex
/// metacharacters keep their meaning. A `name` that yields an
/// uncompilable pattern also returns `""`.
///
/// The captured value runs up to the next `&`, `#`, or end of string and
/// is decoded: `+` becomes a space, then percent-escapes are resolved.
pub fn get_query_param(location: &str, name: &str) -> String {
    let escaped = name.replace('[', "\\[").replace(']', "\\]");

    let re = match Regex::new(&format!(r"[?&]{}=([^&#]*)", escaped)) {
        Ok(re) => re,
        Err(_) => return String::new(),
    };

    match re.captures(location).and_then(|caps| caps.get(1)) {
        Some(m) => decode_component(m.as_str()),
        None => String::new(),
    }
}
