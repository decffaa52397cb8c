//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `$CATALYST_CONFIG` environment variable
//! 2. `~/.config/catalyst/config.toml`
//! 3. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use catalyst_core::job_search::DEFAULT_LOCATION;
use catalyst_mcp::ServerConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub jobs: JobsConfig,
    pub mcp: McpConfig,
}

/// Where the JSON collections live.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Data directory. Default: platform-specific data dir.
    pub data_dir: Option<String>,
}

/// Job search settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct JobsConfig {
    /// Location used when a search doesn't name one.
    pub default_location: String,
}

/// MCP server settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct McpConfig {
    /// Replaces the built-in server instructions.
    pub instructions: Option<String>,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION.into(),
        }
    }
}

impl Config {
    pub fn server_config(&self) -> ServerConfig {
        let mut server = ServerConfig {
            default_location: self.jobs.default_location.clone(),
            ..ServerConfig::default()
        };
        if let Some(instructions) = &self.mcp.instructions {
            server.instructions = instructions.clone();
        }
        server
    }
}

/// Load config from disk. Returns defaults if no config file exists.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(p) if p.exists() => load_from(&p),
        _ => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("CATALYST_CONFIG") {
        return Some(PathBuf::from(p));
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("catalyst").join("config.toml"))
}

/// Show the active config path (for `catalyst config`).
pub fn show_config_path() -> String {
    match config_path() {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}
