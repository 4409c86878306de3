//! Paragraph wrapping and no-wrap marker cleanup.

use crate::code::NO_WRAP_MARKER;

// Block output from earlier passes that must not be wrapped again.
const BLOCK_PREFIXES: [&str; 10] = [
    "<h1>", "<h2>", "<h3>", "<h4>", "<h5>", "<h6>", "<ul>", "<ol>", "<li", "<pre>",
];

fn is_block_line(line: &str) -> bool {
    BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Wrap remaining prose lines in `<p>` elements.
///
/// Blank lines, marked code lines, and recognized block output pass through
/// untouched.
pub(crate) fn wrap(input: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    for line in input.lines() {
        if line.trim().is_empty() || line.starts_with(NO_WRAP_MARKER) || is_block_line(line) {
            output.push(line.to_owned());
        } else {
            output.push(format!("<p>{line}</p>"));
        }
    }
    let mut result = output.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Strip every no-wrap marker from the buffer.
///
/// Runs after placeholder restoration so the markers inside restored code
/// lines are removed too; none may leak into the rendered output.
pub(crate) fn strip_markers(input: &str) -> String {
    input.replace(NO_WRAP_MARKER, "")
}
