//! `papyr render` command.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use papyr_meta::PostMeta;
use papyr_renderer::markdown_to_html;

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to convert.
    file: PathBuf,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let content = std::fs::read_to_string(&self.file)?;
        // Front matter is metadata, not document body
        let (_, body) = PostMeta::parse(&content);
        let html = markdown_to_html(body);

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        if !html.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        Ok(())
    }
}
