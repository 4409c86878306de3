//! Block structure passes: headings and nested lists.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Leading spaces per list nesting level.
const INDENT_UNIT: usize = 2;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#{1,6}) (.*)$").unwrap());

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *)[-*+] (.+)$").unwrap());

static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( *)(\d+)\. (.+)$").unwrap());

/// Convert `#`..`######` heading lines.
///
/// The hash run is matched in one pass with the level taken from its length,
/// so longer runs always win and `###### x` can never come out as an `<h1>`
/// with leftover hashes. Seven or more hashes fail the match and stay prose.
pub(crate) fn headings(input: &str) -> String {
    HEADING_RE
        .replace_all(input, |caps: &Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
        .into_owned()
}

/// One detected list line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListItem {
    /// Nesting level derived from leading-whitespace width.
    level: usize,
    ordered: bool,
    /// Explicit number on ordered items, kept so renumbered or skipped
    /// sequences display faithfully.
    value: Option<u64>,
    content: String,
}

fn parse_item(line: &str) -> Option<ListItem> {
    if let Some(caps) = UNORDERED_ITEM_RE.captures(line) {
        return Some(ListItem {
            level: caps[1].len() / INDENT_UNIT,
            ordered: false,
            value: None,
            content: caps[2].to_owned(),
        });
    }
    ORDERED_ITEM_RE.captures(line).map(|caps| ListItem {
        level: caps[1].len() / INDENT_UNIT,
        ordered: true,
        value: caps[2].parse().ok(),
        content: caps[3].to_owned(),
    })
}

/// Convert contiguous runs of list lines into nested `<ul>`/`<ol>` trees.
///
/// A blank or prose line terminates the current run; detection starts fresh
/// for any list that follows.
pub(crate) fn lists(input: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut run: Vec<ListItem> = Vec::new();

    for line in input.lines() {
        if let Some(item) = parse_item(line) {
            run.push(item);
        } else {
            if !run.is_empty() {
                output.push(assemble(&run));
                run.clear();
            }
            output.push(line.to_owned());
        }
    }
    if !run.is_empty() {
        output.push(assemble(&run));
    }

    let mut result = output.join("\n");
    if input.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Assemble a run of list items into nested list elements.
///
/// Structural recursion with explicit level tracking: an item at the run's
/// base level opens an `<li>`, and the immediately-following run of deeper
/// items is assembled into a nested list inside it before the `<li>` closes.
/// The element type comes from the first item at the base level. Items
/// deeper than the base with no preceding base item are rendered at the base
/// level rather than dropped.
fn assemble(items: &[ListItem]) -> String {
    let base = items.iter().map(|item| item.level).min().unwrap_or(0);
    let ordered = items
        .iter()
        .find(|item| item.level == base)
        .is_some_and(|item| item.ordered);
    let tag = if ordered { "ol" } else { "ul" };

    let mut out = format!("<{tag}>");
    let mut i = 0;
    while i < items.len() {
        let item = &items[i];
        if let (true, Some(value)) = (item.ordered, item.value) {
            write!(out, r#"<li value="{value}">"#).unwrap();
        } else {
            out.push_str("<li>");
        }
        out.push_str(&item.content);

        let mut next = i + 1;
        while next < items.len() && items[next].level > item.level {
            next += 1;
        }
        if next > i + 1 {
            out.push_str(&assemble(&items[i + 1..next]));
        }
        out.push_str("</li>");
        i = next;
    }
    write!(out, "</{tag}>").unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_each_level() {
        for level in 1..=6 {
            let input = format!("{} Title", "#".repeat(level));
            assert_eq!(headings(&input), format!("<h{level}>Title</h{level}>"));
        }
    }

    #[test]
    fn test_heading_requires_space_after_hashes() {
        assert_eq!(headings("#nospace"), "#nospace");
    }

    #[test]
    fn test_heading_seven_hashes_not_matched() {
        assert_eq!(headings("####### too deep"), "####### too deep");
    }

    #[test]
    fn test_heading_mid_document() {
        assert_eq!(headings("before\n## Mid\nafter"), "before\n<h2>Mid</h2>\nafter");
    }

    #[test]
    fn test_flat_unordered_list() {
        assert_eq!(
            lists("- one\n- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_all_unordered_markers() {
        assert_eq!(
            lists("- a\n* b\n+ c"),
            "<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn test_nested_list_two_levels() {
        assert_eq!(
            lists("- a\n  - b\n  - c\n- d"),
            "<ul><li>a<ul><li>b</li><li>c</li></ul></li><li>d</li></ul>"
        );
    }

    #[test]
    fn test_nested_list_three_levels() {
        assert_eq!(
            lists("- a\n  - b\n    - c"),
            "<ul><li>a<ul><li>b<ul><li>c</li></ul></li></ul></li></ul>"
        );
    }

    #[test]
    fn test_ordered_list_keeps_explicit_values() {
        assert_eq!(
            lists("3. three\n7. seven"),
            r#"<ol><li value="3">three</li><li value="7">seven</li></ol>"#
        );
    }

    #[test]
    fn test_ordered_nested_under_unordered() {
        assert_eq!(
            lists("- a\n  1. first\n  2. second"),
            r#"<ul><li>a<ol><li value="1">first</li><li value="2">second</li></ol></li></ul>"#
        );
    }

    #[test]
    fn test_root_type_from_first_base_item() {
        assert_eq!(
            lists("1. one\n- dash"),
            r#"<ol><li value="1">one</li><li>dash</li></ol>"#
        );
    }

    #[test]
    fn test_blank_line_splits_runs() {
        assert_eq!(
            lists("- a\n\n- b"),
            "<ul><li>a</li></ul>\n\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_prose_line_splits_runs() {
        assert_eq!(
            lists("- a\ntext\n- b"),
            "<ul><li>a</li></ul>\ntext\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_over_indented_items_are_not_dropped() {
        // A four-space jump lands two levels down; content still renders
        let html = lists("- a\n    - deep");
        assert!(html.contains("deep"));
        assert!(html.contains("<ul><li>a<ul>"));
    }

    #[test]
    fn test_marker_without_space_is_not_an_item() {
        assert_eq!(lists("-notalist"), "-notalist");
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(lists("- a\n"), "<ul><li>a</li></ul>\n");
    }
}
