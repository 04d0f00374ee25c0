//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use spot_core::Asset;
use spot_fetch::FetcherConfig;
use spot_store::StoreConfig;
use std::collections::HashSet;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fiat currency prices are quoted in.
    #[serde(default = "default_fiat")]
    pub fiat: String,
    /// Assets to watch, in display order.
    #[serde(default = "default_assets")]
    pub assets: Vec<Asset>,
    /// Price fetcher configuration.
    #[serde(default)]
    pub fetcher: FetcherConfig,
    /// Log store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

fn default_fiat() -> String {
    "USD".to_string()
}

fn default_assets() -> Vec<Asset> {
    vec![Asset::new("ETH", "ethereum"), Asset::new("BTC", "bitcoin")]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fiat: default_fiat(),
            assets: default_assets(),
            fetcher: FetcherConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, falling back to built-in defaults when the file
    /// is absent.
    pub fn load(path: &str) -> AppResult<Self> {
        if Path::new(path).exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the rest of the system assumes away: an empty
    /// asset list, or tickers that would collide on log filenames.
    fn validate(&self) -> AppResult<()> {
        if self.assets.is_empty() {
            return Err(AppError::Config("asset list is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for asset in &self.assets {
            if !seen.insert(asset.ticker.as_str()) {
                return Err(AppError::Config(format!(
                    "duplicate ticker in asset list: {}",
                    asset.ticker
                )));
            }
        }

        Ok(())
    }
}
