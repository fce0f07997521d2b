//! Configuration loading
//!
//! Settings come from `config.toml` in the user's config directory, then
//! environment variables (a `.env` file is loaded first when present), then
//! command-line flags applied by the command handlers.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Sizing service used when nothing else is configured
pub const DEFAULT_PRICING_ENDPOINT: &str =
    "https://oizh1vz6i4.execute-api.us-east-1.amazonaws.com/default/test-Cost-estimation-pricing-bedrock";
pub const DEFAULT_TIMEOUT_SECS: u64 = crate::api::DEFAULT_TIMEOUT.as_secs();

pub const ENV_PRICING_URL: &str = "RVSIZER_PRICING_URL";
pub const ENV_TIMEOUT_SECS: &str = "RVSIZER_TIMEOUT_SECS";
pub const ENV_INSTANCE_URL: &str = "RVSIZER_INSTANCE_URL";
pub const ENV_DATABASE_URL: &str = "RVSIZER_DATABASE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pricing: PricingConfig,
    pub provision: ProvisionConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PRICING_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    pub instance_endpoint: Option<String>,
    pub database_endpoint: Option<String>,
}

impl Config {
    /// `<config dir>/rvsizer/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rvsizer")
            .join("config.toml")
    }

    /// Load file settings from the default path, then apply the environment
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env_with(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load settings from a TOML file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override settings from environment-style lookups
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_PRICING_URL) {
            self.pricing.endpoint = url;
        }
        if let Some(secs) = non_empty(ENV_TIMEOUT_SECS) {
            self.pricing.timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", ENV_TIMEOUT_SECS))?;
        }
        if let Some(url) = non_empty(ENV_INSTANCE_URL) {
            self.provision.instance_endpoint = Some(url);
        }
        if let Some(url) = non_empty(ENV_DATABASE_URL) {
            self.provision.database_endpoint = Some(url);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.pricing.timeout_secs)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
