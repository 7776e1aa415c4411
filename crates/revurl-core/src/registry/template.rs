//! Positional `*` placeholder substitution.

use crate::value::ArgValue;

/// Fills `*` placeholders in `template` left to right with the string form
/// of each argument.
///
/// Fewer arguments than placeholders is not an error: the leftover `*`
/// tokens remain in the output. Extra arguments are silently ignored.
pub fn fill_template(template: &str, args: &[ArgValue]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next = args.iter();

    for c in template.chars() {
        if c == '*' {
            match next.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push('*'),
            }
        } else {
            out.push(c);
        }
    }

    out
}
