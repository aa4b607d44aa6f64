//! Custom Askama template filters.

use std::fmt::Display;

/// Escape `&`, `<` and `>` in text inserted into markup.
///
/// Quotes are left as-is: this is minimal escaping, not sanitization.
#[must_use]
pub fn minimal_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Template form of [`minimal_escape`].
///
/// Usage in templates: `{{ shop.name|escape_minimal }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn escape_minimal(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(minimal_escape(&value.to_string()))
}
