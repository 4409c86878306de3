//! Inline passes: emphasis, images, and links.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_STARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

static BOLD_UNDERSCORES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__([^_]+)__").unwrap());

// Emphasis spans must have alphanumeric, non-space edges so stray asterisks
// used as multiplication signs or bullets never match.
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([A-Za-z0-9][^*\n]*[A-Za-z0-9]|[A-Za-z0-9])\*").unwrap());

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Convert bold and italic markers.
///
/// `**` and `__` pairs become `<strong>`; `*` pairs become `<em>`. Single
/// underscores are left alone, since `snake_case` identifiers make them too
/// ambiguous to treat as emphasis.
pub(crate) fn emphasis(input: &str) -> String {
    let bold = BOLD_STARS_RE.replace_all(input, "<strong>$1</strong>");
    let bold = BOLD_UNDERSCORES_RE.replace_all(&bold, "<strong>$1</strong>");
    ITALIC_RE.replace_all(&bold, "<em>$1</em>").into_owned()
}

/// Convert `![alt](url)` to images.
///
/// Must run before the link pass; the leading `!` is the only thing keeping
/// the two patterns apart, so images have to be consumed first.
pub(crate) fn images(input: &str) -> String {
    IMAGE_RE
        .replace_all(input, r#"<img src="$2" alt="$1">"#)
        .into_owned()
}

/// Convert `[text](url)` to anchors.
pub(crate) fn links(input: &str) -> String {
    LINK_RE
        .replace_all(input, r#"<a href="$2">$1</a>"#)
        .into_owned()
}
