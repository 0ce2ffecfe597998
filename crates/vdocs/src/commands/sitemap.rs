//! `vdocs sitemap` command implementation.

use std::path::PathBuf;

use clap::Args;
use vdocs_config::CliSettings;
use vdocs_server::ServerConfig;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sitemap command.
#[derive(Args)]
pub(crate) struct SitemapArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Output file (default: public/sitemap.xml next to the config).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SitemapArgs {
    /// Execute the sitemap command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, content cannot be loaded or
    /// the file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.site.load_config(CliSettings {
            sitemap_output: self.output,
            ..CliSettings::default()
        })?;
        let path = &config.sitemap_resolved.output;

        output.field("Source", config.docs_resolved.source_dir.display());
        output.field("Output", path.display());

        let site = ServerConfig::from_config(&config, String::new())?.site();
        let sitemap = site.sitemap()?;
        sitemap.write(path)?;

        output.success(&format!(
            "Wrote {} URLs to {}",
            sitemap.len(),
            path.display()
        ));

        Ok(())
    }
}
