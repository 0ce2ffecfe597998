//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod serve;
pub(crate) mod sitemap;

use std::path::PathBuf;

use clap::Args;
use vdocs_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use nav::NavArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use sitemap::SitemapArgs;

/// Arguments shared by every command that reads content.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover vdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown content directory (overrides config).
    #[arg(short, long, env = "VDOCS_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Public base URL of the site (overrides config).
    #[arg(long, env = "VDOCS_BASE_URL")]
    base_url: Option<String>,
}

impl SiteArgs {
    /// Load configuration with these arguments and `extra` as overrides.
    pub(crate) fn load_config(self, extra: CliSettings) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            base_url: self.base_url,
            ..extra
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
