//! HTML helper functions

/// Marker appended to content previews that were cut short
pub const TRUNCATION_MARKER: &str = " [...]";

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Strip tags and neutralize quotes so the result is safe inside both
/// element bodies and double-quoted attributes. Existing entities are kept.
pub fn no_html(s: &str) -> String {
    strip_html(s).replace('"', "&quot;").trim().to_string()
}

/// Truncate text to a number of whitespace-separated words
///
/// Returns the text and whether it was cut. Text within the limit comes
/// back untouched; cut text is re-joined with single spaces.
pub fn truncate_words(s: &str, limit: usize) -> (String, bool) {
    let words: Vec<&str> = s.split_whitespace().collect();

    if words.len() > limit {
        (words[..limit].join(" "), true)
    } else {
        (s.to_string(), false)
    }
}

/// Format an optional attribute; empty values produce nothing
///
/// # Examples
/// ```ignore
/// attr("id", "featured") // -> r#" id="featured""#
/// attr("id", "")         // -> ""
/// ```
pub fn attr(name: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!(r#" {}="{}""#, name, value)
    }
}
