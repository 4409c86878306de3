//! Post index entries.

use serde::{Deserialize, Serialize};

/// One row of the generated post index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    /// Publication date as written in front matter (`YYYY-MM-DD`).
    pub date: String,
    /// Post title from front matter.
    pub title: String,
    /// URL slug derived from the title.
    pub slug: String,
    /// Optional short description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PostEntry {
    /// URL path of the post's generated page.
    #[must_use]
    pub fn url_path(&self) -> String {
        format!("/posts/{}/", self.slug)
    }
}
