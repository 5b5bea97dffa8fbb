use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides any persisted endpoint
pub const RPC_URL_ENV: &str = "ETHLOOK_RPC_URL";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub rpc_url: Option<String>,
}

impl Config {
    /// Returns the config directory path (~/.config/ethlook on Linux/macOS)
    fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("ethlook"))
            .context("Could not determine config directory")
    }

    /// Returns the config file path
    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {dir:?}"))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    /// Set the RPC URL and persist
    pub fn set_rpc(&mut self, url: String) -> Result<()> {
        self.rpc_url = Some(url);
        self.save()
    }

    /// Resolve the endpoint to use: environment override first, then the
    /// persisted config. None means the caller has to ask the user.
    pub fn resolve_rpc_url(&self) -> Option<String> {
        pick_endpoint(std::env::var(RPC_URL_ENV).ok(), self.rpc_url.as_deref())
    }
}

fn pick_endpoint(env_url: Option<String>, config_url: Option<&str>) -> Option<String> {
    env_url
        .filter(|u| !u.trim().is_empty())
        .or_else(|| config_url.map(str::to_string))
}
