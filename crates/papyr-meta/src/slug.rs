//! URL-friendly slug derivation from post titles.

use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Convert a title to a URL-friendly slug.
///
/// Lowercases, drops characters outside word/space/hyphen, replaces
/// whitespace runs with single hyphens, collapses hyphen runs, and trims
/// hyphens from both ends.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_SLUG_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(&cleaned, "-");
    HYPHEN_RUN_RE
        .replace_all(&hyphenated, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slugify("a   b\tc"), "a-b-c");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(slugify("a -- b"), "a-b");
    }

    #[test]
    fn test_edge_hyphens_trimmed() {
        assert_eq!(slugify("  Hello  "), "hello");
        assert_eq!(slugify("- leading dash"), "leading-dash");
    }

    #[test]
    fn test_already_slug_shaped() {
        assert_eq!(slugify("my-post-title"), "my-post-title");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slugify(""), "");
    }
}
