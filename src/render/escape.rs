// SPDX-License-Identifier: PMPL-1.0-or-later

//! Escaping for text and attribute values
//!
//! Every piece of content text goes through [`escape_html`] before it is
//! placed between tags, and every attribute value through [`escape_attr`].
//! Both replace all five markup-significant characters, so output is safe in
//! either position.

/// Escape text for use as element content.
pub fn escape_html(s: &str) -> String {
    escape_into(s, String::with_capacity(s.len()))
}

/// Escape a value for use inside a double- or single-quoted attribute
/// (`href`, `src`, `alt`, `aria-label`).
pub fn escape_attr(s: &str) -> String {
    escape_into(s, String::with_capacity(s.len() + 8))
}

/// Escape optional text; absent text is empty.
pub fn escape_opt(s: Option<&str>) -> String {
    s.map(escape_html).unwrap_or_default()
}

fn escape_into(s: &str, mut out: String) -> String {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverse of [`escape_html`] for the five entities it produces.
pub fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
