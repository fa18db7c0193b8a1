//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, BookstockConfig};

/// Resolve the config file path: `--config` first, then the XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.config.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_config_path()
}

/// Resolve the store path: `--store`, then config `store.path`, then the
/// XDG data default.
pub fn resolve_store_path(cli: &Cli, config: &BookstockConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    if let Some(path) = config.store.path.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_store_path()
}
