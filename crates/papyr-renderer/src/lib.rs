//! Markdown-to-HTML conversion as an ordered pipeline of rewrite passes.
//!
//! The converter is a pure function: text in, HTML fragment out, no I/O and
//! no shared state, so it is safe to call concurrently from independent
//! contexts. Each pass takes the buffer emitted by the previous one:
//!
//! 1. HTML escaping, before anything structural, so user content can never
//!    inject markup
//! 2. fenced-code protection (blocks rendered early and parked behind
//!    opaque placeholders)
//! 3. inline code
//! 4. headings
//! 5. nested lists
//! 6. emphasis
//! 7. images, then links
//! 8. paragraph wrapping
//! 9. placeholder restoration and marker cleanup
//! 10. JavaScript syntax highlighting inside `language-js` blocks
//!
//! Code protection has to run before every pass that pattern-matches
//! markdown syntax: code samples legitimately contain `#`, `*`, backticks
//! and brackets that would otherwise be reinterpreted.
//!
//! # Example
//!
//! ```
//! use papyr_renderer::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\n**Bold** text");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<strong>Bold</strong>"));
//! ```

mod block;
mod code;
mod escape;
mod highlight;
mod inline;
mod paragraph;

pub use escape::escape_html;

/// Convert one markdown document body to an HTML fragment.
///
/// Total over all inputs: empty input yields an empty string, malformed
/// constructs (unterminated fences, unmatched brackets) are left as literal
/// text, and nothing panics. The output is a fragment for insertion into a
/// container element, not a full document.
#[must_use]
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let buffer = escape::escape_html(markdown);
    let (buffer, blocks) = code::ProtectedBlocks::protect(&buffer);
    let buffer = code::inline_code(&buffer);
    let buffer = block::headings(&buffer);
    let buffer = block::lists(&buffer);
    let buffer = inline::emphasis(&buffer);
    let buffer = inline::images(&buffer);
    let buffer = inline::links(&buffer);
    let buffer = paragraph::wrap(&buffer);
    // Restore before marker cleanup so markers inside code lines are stripped
    let buffer = blocks.restore(&buffer);
    let buffer = paragraph::strip_markers(&buffer);
    highlight::highlight_js(&buffer)
}
