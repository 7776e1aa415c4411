//! Merging query arguments into a URL string.

use regex::{NoExpand, Regex};

use crate::value::ArgValue;

/// Sets `key=value` in `url`'s query string.
///
/// If `key` already appears (whole-word on the left: preceded by a
/// non-identifier character or start-of-string, followed immediately by
/// `=`), its value — everything up to the next `&` or the end — is
/// replaced in place. Otherwise the pair is appended with the appropriate
/// `?`/`&` separator. After the call the key appears at most once.
///
/// `value` is not escaped; encoding reserved characters is the caller's
/// job.
pub fn combine_arg(url: &str, key: &str, value: ArgValue) -> String {
    let replacement = format!("{}={}", key, value);

    // The key is escaped, so the pattern always compiles; the fallthrough
    // keeps the function total either way.
    let pattern = format!(r"\b{}=[^&]*", regex::escape(key));
    if let Ok(re) = Regex::new(&pattern) {
        if re.is_match(url) {
            return re.replace(url, NoExpand(&replacement)).into_owned();
        }
    }

    let mut out = with_query_separator(url);
    out.push_str(&replacement);
    out
}

/// Appends a pre-encoded argument blob (`a=1&b=2`) to `url`.
///
/// Only the `?`/`&` separator is handled; `raw_args` is not parsed and
/// existing keys are not deduplicated.
pub fn combine_args(url: &str, raw_args: &str) -> String {
    let mut out = with_query_separator(url);
    out.push_str(raw_args);
    out
}

/// Copies `url` and ensures it is ready for one more `key=value` pair:
/// `?` if there is no query string yet, `&` unless one is already trailing.
fn with_query_separator(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + 1);
    out.push_str(url);
    if !url.contains('?') {
        out.push('?');
    } else if !url.ends_with('&') {
        out.push('&');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_first_pair() {
        assert_eq!(combine_arg("/x", "page", 2i64.into()), "/x?page=2");
    }

    #[test]
    fn replaces_existing_value() {
        assert_eq!(
            combine_arg("/x?page=2", "page", 3i64.into()),
            "/x?page=3"
        );
    }

    #[test]
    fn respects_trailing_ampersand() {
        assert_eq!(combine_arg("/x?a=1&", "b", 2i64.into()), "/x?a=1&b=2");
    }

    #[test]
    fn appends_with_ampersand_after_existing_pairs() {
        assert_eq!(
            combine_arg("/x?a=1", "b", "two".into()),
            "/x?a=1&b=two"
        );
    }

    #[test]
    fn replaces_in_the_middle_preserving_rest() {
        assert_eq!(
            combine_arg("/x?a=1&page=2&b=3", "page", 9i64.into()),
            "/x?a=1&page=9&b=3"
        );
    }

    #[test]
    fn replaces_empty_value() {
        assert_eq!(combine_arg("/x?q=&a=1", "q", "hi".into()), "/x?q=hi&a=1");
    }

    #[test]
    fn key_suffix_of_other_key_is_not_replaced() {
        // "order" inside "sub_order" is not a whole-word match.
        assert_eq!(
            combine_arg("/x?sub_order=asc", "order", "desc".into()),
            "/x?sub_order=asc&order=desc"
        );
    }

    #[test]
    fn bool_value_coerced() {
        assert_eq!(combine_arg("/x", "all", true.into()), "/x?all=true");
    }

    #[test]
    fn dollar_signs_in_value_are_literal() {
        assert_eq!(
            combine_arg("/x?v=1", "v", "$1".into()),
            "/x?v=$1"
        );
    }

    #[test]
    fn idempotent_for_fixed_key_value() {
        let once = combine_arg("/x?a=1", "page", 2i64.into());
        let twice = combine_arg(&once, "page", 2i64.into());
        assert_eq!(once, twice);
    }

    #[test]
    fn combine_args_appends_blob_verbatim() {
        assert_eq!(combine_args("/x", "a=1&b=2"), "/x?a=1&b=2");
        assert_eq!(combine_args("/x?c=3", "a=1&b=2"), "/x?c=3&a=1&b=2");
        assert_eq!(combine_args("/x?c=3&", "a=1"), "/x?c=3&a=1");
    }

    #[test]
    fn combine_args_does_not_deduplicate() {
        assert_eq!(combine_args("/x?a=1", "a=2"), "/x?a=1&a=2");
    }
}
