//! HTTP client for the spot price listing endpoint.
//!
//! The provider exposes a single listing endpoint returning a JSON array of
//! entries, each carrying an `id` (e.g. "bitcoin") and a fiat-specific price
//! field (e.g. `price_usd`) as a numeric-looking string.

use crate::error::{FetchError, FetchResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Header carrying the static API version date, when configured.
const VERSION_HEADER: &str = "CB-VERSION";

/// Provider id -> price string, as returned by the listing endpoint.
pub type PriceMap = HashMap<String, String>;

/// Price fetcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Listing endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Page size requested from the listing endpoint.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Request timeout (seconds). A hung provider fails the run instead of
    /// blocking it forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Static API version sent as a request header when set.
    #[serde(default)]
    pub api_version: Option<String>,
}

fn default_api_url() -> String {
    "https://api.coinmarketcap.com/v1/ticker/".to_string()
}

fn default_page_limit() -> u32 {
    100
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_limit: default_page_limit(),
            timeout_secs: default_timeout_secs(),
            api_version: None,
        }
    }
}

/// Client for the price listing endpoint.
pub struct PriceFetcher {
    client: Client,
    config: FetcherConfig,
}

impl PriceFetcher {
    /// Create a new fetcher with the configured request timeout.
    pub fn new(config: FetcherConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch the listing once and key it by provider id.
    ///
    /// Transport failures, non-2xx statuses and an unparsable body fail the
    /// whole fetch; no partial map is returned. Individual entries missing
    /// an expected field are skipped with a warning.
    pub async fn fetch_all(&self, fiat: &str) -> FetchResult<PriceMap> {
        let url = format!("{}?limit={}", self.config.api_url, self.config.page_limit);
        debug!(url = %url, "Requesting price listing");

        let mut request = self.client.get(&url);
        if let Some(version) = &self.config.api_version {
            request = request.header(VERSION_HEADER, version.as_str());
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(format!("invalid JSON body: {e}")))?;

        let prices = parse_listing(&body, &price_field(fiat))?;

        info!(entries = prices.len(), "Fetched price listing");
        Ok(prices)
    }
}

/// Name of the per-entry price field for a fiat currency (`price_usd`).
fn price_field(fiat: &str) -> String {
    format!("price_{}", fiat.to_lowercase())
}

/// Map a listing response to provider id -> price string.
///
/// The response must be a JSON array; entries missing the id or the price
/// field are skipped rather than failing the batch.
fn parse_listing(body: &serde_json::Value, price_field: &str) -> FetchResult<PriceMap> {
    let entries = body
        .as_array()
        .ok_or_else(|| FetchError::Parse("listing response is not an array".to_string()))?;

    let mut prices = PriceMap::new();

    for (idx, entry) in entries.iter().enumerate() {
        let id = match entry.get("id").and_then(|v| v.as_str()) {
            Some(id) if !id.is_empty() => id,
            _ => {
                warn!(idx, "Skipping listing entry without id");
                continue;
            }
        };

        match entry.get(price_field).and_then(|v| v.as_str()) {
            Some(price) => {
                prices.insert(id.to_string(), price.to_string());
            }
            None => {
                warn!(idx, id, field = %price_field, "Skipping listing entry without price");
            }
        }
    }

    Ok(prices)
}
