//! Best-effort JavaScript syntax highlighting inside rendered code blocks.
//!
//! Only blocks tagged `language-js` are touched; any other language string
//! passes through untouched. Comment spans are parked behind placeholders
//! before the other rules run and restored last, so comment text is never
//! itself re-highlighted.

use std::sync::LazyLock;

use regex::{Captures, Regex};

const COMMENT_TOKEN: &str = "{{COMMENT}}";

static JS_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<pre><code class="language-js">)(.*?)(</code></pre>)"#).unwrap()
});

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)//.*$").unwrap());

// No backreferences in the regex engine, so the three quote styles are
// spelled out instead of `(["'`])(.*?)\1`.
static STRING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"\n]*"|'[^'\n]*'|`[^`\n]*`"#).unwrap());

static FUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z_$][A-Za-z0-9_$]*)(\s*\()").unwrap());

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)\b").unwrap());

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(const|let|var|function|return|async|await|try|catch|throw|if|else|for|while|class|new|export|import|from|this|constructor)(\s+)",
    )
    .unwrap()
});

/// Apply the highlight sub-pass to every `language-js` block in the buffer.
pub(crate) fn highlight_js(input: &str) -> String {
    JS_BLOCK_RE
        .replace_all(input, |caps: &Captures| {
            format!("{}{}{}", &caps[1], highlight_block(&caps[2]), &caps[3])
        })
        .into_owned()
}

fn highlight_block(code: &str) -> String {
    // Comments out first so no later rule rewrites their text
    let mut comments: Vec<String> = Vec::new();
    let mut out = COMMENT_RE
        .replace_all(code, |caps: &Captures| {
            comments.push(caps[0].to_owned());
            COMMENT_TOKEN.to_owned()
        })
        .into_owned();

    out = STRING_RE
        .replace_all(&out, |caps: &Captures| {
            format!(r#"<span class="string">{}</span>"#, &caps[0])
        })
        .into_owned();

    out = FUNCTION_RE
        .replace_all(&out, r#"<span class="function">$1</span>$2"#)
        .into_owned();

    out = NUMBER_RE
        .replace_all(&out, r#"<span class="number">$1</span>"#)
        .into_owned();

    // A keyword counts only when followed by exactly one whitespace
    // character; `class="..."` in generated markup never qualifies.
    out = KEYWORD_RE
        .replace_all(&out, |caps: &Captures| {
            let whitespace = &caps[2];
            if whitespace.len() == 1 {
                format!(r#"<span class="keyword">{}</span>{whitespace}"#, &caps[1])
            } else {
                caps[0].to_owned()
            }
        })
        .into_owned();

    // Restore comments, wrapped, in insertion order
    for comment in comments {
        out = out.replacen(
            COMMENT_TOKEN,
            &format!(r#"<span class="comment">{comment}</span>"#),
            1,
        );
    }

    // Drop any paragraph tags that reached code text
    out.replace("<p>", "").replace("</p>", "")
}
