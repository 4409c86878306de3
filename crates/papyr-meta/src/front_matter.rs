//! Front-matter extraction and parsing.
//!
//! The metadata block is a YAML mapping of scalar fields. A document without
//! a block, or with a malformed one, still yields its body: a bad post must
//! never abort a whole site build.

use serde::{Deserialize, Serialize};

/// Metadata parsed from a post's front-matter block.
///
/// All fields are optional. `None` means the field was not set for this post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Post title, also the source of the post's slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date as written, expected `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Short description for display in post listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PostMeta {
    /// Parse metadata from the raw text of a front-matter block.
    ///
    /// Empty content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, MetaError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed).map_err(|e| MetaError::Parse(format!("Invalid YAML: {e}")))
    }

    /// Split a document into metadata and body.
    ///
    /// A missing or malformed front-matter block degrades to default
    /// metadata with the body intact.
    #[must_use]
    pub fn parse(text: &str) -> (Self, &str) {
        let (block, body) = split_front_matter(text);
        let meta = block
            .and_then(|raw| Self::from_yaml(raw).ok())
            .unwrap_or_default();
        (meta, body)
    }

    /// Check if metadata has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.description.is_none()
    }
}

/// Error type for metadata operations.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Split a leading `---`-delimited metadata block off a document.
///
/// Returns the raw block content (without delimiters) and the remaining
/// body. Documents without a block return `(None, text)` unchanged; the
/// opening delimiter must be the very first line and the closing delimiter
/// must sit on its own line.
#[must_use]
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix("---\n") else {
        return (None, text);
    };
    if let Some(end) = rest.find("\n---\n") {
        return (Some(&rest[..end]), &rest[end + 5..]);
    }
    if let Some(block) = rest.strip_suffix("\n---") {
        return (Some(block), "");
    }
    // Unterminated block: treat the whole document as body
    (None, text)
}
