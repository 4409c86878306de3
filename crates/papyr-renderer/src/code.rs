//! Fenced-code protection and inline code.
//!
//! Fenced blocks are rendered to their final `<pre><code>` form early and
//! parked behind opaque placeholders, so no later pass can reinterpret code
//! content as markdown syntax. The table is populated once during protection
//! and drained once during restoration.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::unescape_quotes;

/// Sentinel prefix exempting a line from paragraph wrapping.
///
/// Every occurrence is stripped before the final output is returned.
pub(crate) const NO_WRAP_MARKER: &str = "{{NO_WRAP}}";

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Table of rendered code-block fragments, keyed by insertion order.
#[derive(Debug, Default)]
pub(crate) struct ProtectedBlocks {
    fragments: Vec<String>,
}

impl ProtectedBlocks {
    fn placeholder(index: usize) -> String {
        format!("{{{{CODE_BLOCK_{index}}}}}")
    }

    /// Replace fenced code blocks with placeholders, rendering each block to
    /// its finished fragment.
    ///
    /// Leading and trailing blank lines are dropped, quote entities from the
    /// escape pass are undone so displayed code keeps literal quotes, and
    /// each code line (plus the placeholder line itself) is prefixed with
    /// [`NO_WRAP_MARKER`].
    pub(crate) fn protect(input: &str) -> (String, Self) {
        let mut blocks = Self::default();
        let output = FENCE_RE
            .replace_all(input, |caps: &Captures| {
                let lang = caps.get(1).map(|m| m.as_str());
                let lines: Vec<&str> = caps[2].lines().collect();
                let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(0);
                let end = lines
                    .iter()
                    .rposition(|l| !l.trim().is_empty())
                    .map_or(0, |i| i + 1);
                let body = lines[start..end]
                    .iter()
                    .map(|line| format!("{NO_WRAP_MARKER}{line}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                let body = unescape_quotes(&body);

                let fragment = match lang {
                    Some(lang) => {
                        format!(r#"<pre><code class="language-{lang}">{body}</code></pre>"#)
                    }
                    None => format!("<pre><code>{body}</code></pre>"),
                };
                let placeholder = Self::placeholder(blocks.fragments.len());
                blocks.fragments.push(fragment);
                format!("{NO_WRAP_MARKER}{placeholder}")
            })
            .into_owned();
        (output, blocks)
    }

    /// Substitute every placeholder with its fragment, draining the table.
    ///
    /// Each placeholder is restored exactly once, in insertion order.
    pub(crate) fn restore(self, buffer: &str) -> String {
        let mut output = buffer.to_owned();
        for (index, fragment) in self.fragments.iter().enumerate() {
            output = output.replacen(&Self::placeholder(index), fragment, 1);
        }
        output
    }
}

/// Convert single-backtick spans to `<code>` elements.
///
/// Placeholders contain no backticks, so a span can never straddle a
/// protected block.
pub(crate) fn inline_code(input: &str) -> String {
    INLINE_CODE_RE
        .replace_all(input, "<code>$1</code>")
        .into_owned()
}
