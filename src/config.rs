// src/config.rs
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about = "Tender Food: sellers compete on price for your meal request")]
pub struct Cli {
    /// JSON file overriding the default sellers and quick tags
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_sellers")]
    pub sellers: Vec<String>,
    #[serde(default = "default_quick_tags", rename = "quickTags")]
    pub quick_tags: Vec<String>,
}

fn default_sellers() -> Vec<String> {
    ["RM Sederhana", "Warteg Kharisma", "RM Pagi Sore"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_quick_tags() -> Vec<String> {
    ["Something Sweet", "A Lot", "Simple", "Last Longer"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            sellers: default_sellers(),
            quick_tags: default_quick_tags(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config must name at least one seller")]
    NoSellers,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        if config.sellers.is_empty() {
            return Err(ConfigError::NoSellers);
        }
        Ok(config)
    }

    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        match &cli.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
