//! `mdp serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdp_config::{CliSettings, Config};
use mdp_server::{run_server, server_config_from_mdp_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover mdp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog root directory (overrides config).
    #[arg(short, long, env = "MDP_ROOT_DIR")]
    root_dir: Option<PathBuf>,

    /// URL prefix requests must start with (overrides config).
    #[arg(short = 'u', long)]
    url_prefix: Option<String>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            root_dir: self.root_dir,
            url_prefix: self.url_prefix,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Configuration loaded");

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Root directory: {}",
            config.catalog_resolved.root_dir.display()
        ));
        match &config.catalog_resolved.url_prefix {
            Some(prefix) => output.info(&format!("URL prefix: {prefix}")),
            None => output.info("URL prefix: none (all paths)"),
        }

        run_server(server_config_from_mdp_config(&config)).await?;

        Ok(())
    }
}
