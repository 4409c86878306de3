//! Site build pipeline.
//!
//! Scans the posts directory, renders each post, and writes the output tree:
//!
//! ```text
//! <output_dir>/
//!   posts.json
//!   posts/<slug>/index.html
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use papyr_meta::{PostMeta, slugify};
use papyr_renderer::{escape_html, markdown_to_html};

use crate::post::PostEntry;

/// Site build error.
///
/// Only whole-build failures surface here; per-post problems are logged and
/// counted in [`BuildReport::skipped`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Posts directory missing or not a directory.
    #[error("posts directory not found: {}", .0.display())]
    PostsDirNotFound(PathBuf),
    /// I/O error on the source or output tree.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Post index serialization error.
    #[error("failed to serialize post index: {0}")]
    Index(#[from] serde_json::Error),
}

/// Result of a site build.
#[derive(Clone, Debug)]
pub struct BuildReport {
    /// Posts written, newest first.
    pub posts: Vec<PostEntry>,
    /// Posts skipped because of missing metadata or read failures.
    pub skipped: usize,
}

/// Builds the static site from a posts directory.
///
/// # Example
///
/// ```no_run
/// use papyr_site::SiteBuilder;
///
/// let report = SiteBuilder::new("posts", "public")
///     .with_site_title("My Corner")
///     .build()?;
/// assert_eq!(report.skipped, 0);
/// # Ok::<(), papyr_site::BuildError>(())
/// ```
pub struct SiteBuilder {
    posts_dir: PathBuf,
    output_dir: PathBuf,
    site_title: String,
}

impl SiteBuilder {
    /// Create a builder for the given source and output directories.
    #[must_use]
    pub fn new(posts_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            output_dir: output_dir.into(),
            site_title: "Blog".to_owned(),
        }
    }

    /// Set the site title used in generated page shells.
    #[must_use]
    pub fn with_site_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = title.into();
        self
    }

    /// Run the build: render every post and write the output tree.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the posts directory is missing or the
    /// output tree cannot be written. Individual bad posts are skipped with
    /// a warning instead.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        if !self.posts_dir.is_dir() {
            return Err(BuildError::PostsDirNotFound(self.posts_dir.clone()));
        }

        let mut sources: Vec<PathBuf> = fs::read_dir(&self.posts_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        sources.sort();

        let mut posts: Vec<PostEntry> = Vec::new();
        let mut seen_slugs: HashSet<String> = HashSet::new();
        let mut skipped = 0;

        for path in sources {
            match self.build_post(&path, &mut seen_slugs)? {
                Some(entry) => posts.push(entry),
                None => skipped += 1,
            }
        }

        // Newest first; ISO dates order lexicographically
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        fs::create_dir_all(&self.output_dir)?;
        let index = serde_json::to_string_pretty(&posts)?;
        fs::write(self.output_dir.join("posts.json"), index)?;

        tracing::info!(
            post_count = posts.len(),
            skipped,
            output_dir = %self.output_dir.display(),
            "Site build completed"
        );

        Ok(BuildReport { posts, skipped })
    }

    /// Render one post and write its page.
    ///
    /// Returns `Ok(None)` when the post is skipped (unreadable, incomplete
    /// front matter, or a duplicate slug).
    fn build_post(
        &self,
        path: &Path,
        seen_slugs: &mut HashSet<String>,
    ) -> Result<Option<PostEntry>, BuildError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read post");
                return Ok(None);
            }
        };

        let (meta, body) = PostMeta::parse(&content);
        let (Some(title), Some(date)) = (meta.title, meta.date) else {
            tracing::warn!(
                path = %path.display(),
                "Skipping post: missing title or date in front matter"
            );
            return Ok(None);
        };

        let slug = slugify(&title);
        if slug.is_empty() {
            tracing::warn!(path = %path.display(), title = %title, "Skipping post: empty slug");
            return Ok(None);
        }
        if !seen_slugs.insert(slug.clone()) {
            tracing::warn!(path = %path.display(), slug = %slug, "Skipping post: duplicate slug");
            return Ok(None);
        }

        let html = markdown_to_html(body);
        let page = page_shell(&self.site_title, &title, &html);

        let page_dir = self.output_dir.join("posts").join(&slug);
        fs::create_dir_all(&page_dir)?;
        fs::write(page_dir.join("index.html"), page)?;
        tracing::debug!(slug = %slug, "Post written");

        Ok(Some(PostEntry {
            date,
            title,
            slug,
            description: meta.description,
        }))
    }
}

/// Wrap a rendered post fragment in a minimal page shell.
fn page_shell(site_title: &str, post_title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} - {}</title>\n\
         <link rel=\"stylesheet\" href=\"/styles.css\">\n\
         </head>\n\
         <body>\n\
         <article id=\"blog-content\">\n\
         {body}\n\
         </article>\n\
         </body>\n\
         </html>\n",
        escape_html(post_title),
        escape_html(site_title),
    )
}
