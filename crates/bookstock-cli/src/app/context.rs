//! Application context for the Bookstock CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use bookstock_core::Inventory;

use crate::cli::Cli;
use crate::config::{read_config, BookstockConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_store_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<BookstockConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&BookstockConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli)?;
            read_config(&path)
        })
    }

    /// Log filter directive: `--log-level`, then config `log.level`.
    pub fn log_directive(&self) -> anyhow::Result<String> {
        if let Some(level) = self.cli.log_level.as_deref() {
            return Ok(level.to_string());
        }
        Ok(self.config()?.log.level.clone())
    }

    /// Currency symbol used when printing prices.
    pub fn currency(&self) -> anyhow::Result<&str> {
        Ok(self.config()?.ui.currency.as_str())
    }

    /// Build the UI context for one command.
    pub fn ui(&self, json: bool) -> anyhow::Result<UiContext> {
        let no_color = self.cli.no_color || !self.config()?.ui.color;
        Ok(UiContext::from_env(json, no_color))
    }

    /// Resolved store path for this run.
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Open the inventory at the resolved store path.
    pub fn open_inventory(&self) -> anyhow::Result<Inventory> {
        let path = self.store_path()?;
        tracing::debug!(path = %path.display(), "opening inventory");
        Ok(Inventory::open(&path).map_err(crate::errors::CliError::from)?)
    }
}
