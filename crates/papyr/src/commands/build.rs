//! `papyr build` command.

use std::path::PathBuf;

use clap::Args;
use papyr_config::{CliSettings, Config};
use papyr_site::SiteBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to papyr.toml (discovered in parent directories by default).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Posts source directory (overrides config).
    #[arg(long)]
    source: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            posts_dir: self.source,
            output_dir: self.out,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;

        output.info(&format!(
            "Building {} from {}",
            config.site.title,
            config.build_resolved.posts_dir.display()
        ));

        let report = SiteBuilder::new(
            config.build_resolved.posts_dir.clone(),
            config.build_resolved.output_dir.clone(),
        )
        .with_site_title(config.site.title.clone())
        .build()?;

        if report.skipped > 0 {
            output.warning(&format!("{} post(s) skipped", report.skipped));
        }
        output.success(&format!(
            "Built {} post(s) into {}",
            report.posts.len(),
            config.build_resolved.output_dir.display()
        ));

        Ok(())
    }
}
