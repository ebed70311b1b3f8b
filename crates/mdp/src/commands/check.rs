//! `mdp check` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdp_catalog::CatalogBuilder;
use mdp_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover mdp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog root directory (overrides config).
    #[arg(short, long, env = "MDP_ROOT_DIR")]
    root_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Build the catalog once and list its keys.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or any file fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            root_dir: self.root_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let root = &config.catalog_resolved.root_dir;

        output.heading(&format!("Checking {}", root.display()));
        let catalog = CatalogBuilder::new(root).build()?;

        if catalog.is_empty() {
            output.warning("No documents or menus found");
            return Ok(());
        }

        for key in catalog.keys() {
            output.info(&format!("  {key}"));
        }
        output.success(&format!("{} entries", catalog.len()));

        Ok(())
    }
}
