use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR, DEFAULT_CURRENCY, DEFAULT_LOG_LEVEL, STORE_FILE};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BookstockConfig {
    pub store: StoreSection,
    pub ui: UiSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiSection {
    pub currency: String,
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            color: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(STORE_FILE))
}

/// Read the config file at `path`. A missing file yields the defaults.
pub fn read_config(path: &Path) -> anyhow::Result<BookstockConfig> {
    if !path.exists() {
        return Ok(BookstockConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> Result<BookstockConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
