//! Query-string utilities: textual argument merge and parameter extraction.
//!
//! The merge operations work on the URL as text (replace-in-place or
//! append) rather than re-serializing the query string, so unrelated
//! content — ordering, encoding, even a trailing `&` — is preserved
//! byte for byte.

mod combine;
mod decode;
mod extract;

pub use combine::{combine_arg, combine_args};
pub use extract::get_query_param;
