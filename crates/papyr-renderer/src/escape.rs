//! HTML escaping for untrusted markdown input.

/// Escape the five HTML-reserved characters.
///
/// Runs over the whole buffer before any structural pass, so user content
/// can never inject markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Undo the quote entities inside protected code so displayed code keeps
/// literal quotes. The angle-bracket and ampersand entities stay escaped.
pub(crate) fn unescape_quotes(text: &str) -> String {
    text.replace("&quot;", "\"").replace("&#39;", "'")
}
