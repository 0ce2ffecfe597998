//! `vdocs nav` command implementation.

use clap::Args;
use console::Term;
use vdocs_config::CliSettings;
use vdocs_nav::{NavSection, NavTree};
use vdocs_server::ServerConfig;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Only print one tree (docs, api or codelabs).
    #[arg(short, long)]
    tree: Option<NavTree>,

    /// Print JSON to stdout instead of an outline.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or content cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.site.load_config(CliSettings::default())?;
        let site = ServerConfig::from_config(&config, String::new())?.site();
        let navigation = site.navigation()?;

        if self.json {
            let json = match self.tree {
                Some(tree) => serde_json::to_string_pretty(navigation.tree(tree))?,
                None => serde_json::to_string_pretty(&navigation)?,
            };
            Term::stdout().write_line(&json)?;
            return Ok(());
        }

        let output = Output::new();
        let trees = self.tree.map_or(NavTree::ALL.to_vec(), |tree| vec![tree]);
        for tree in trees {
            output.heading(tree.root());
            for line in outline(navigation.tree(tree)) {
                output.info(&line);
            }
        }

        Ok(())
    }
}

/// Indented outline of sections and their items.
fn outline(sections: &[NavSection]) -> Vec<String> {
    sections
        .iter()
        .flat_map(|section| {
            std::iter::once(format!("{} ({})", section.title, section.key)).chain(
                section
                    .items
                    .iter()
                    .map(|item| format!("  {}  {}", item.title, item.href)),
            )
        })
        .collect()
}
