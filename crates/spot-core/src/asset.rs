//! Watched asset definitions.

use serde::{Deserialize, Serialize};

/// One watched asset.
///
/// Carries both representations an asset needs: the short ticker used for
/// display and log filenames (e.g. "BTC"), and the id the price provider
/// keys its listing entries by (e.g. "bitcoin"). Tickers must be unique
/// within a configured list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Short symbol for display and filenames (e.g. "BTC").
    pub ticker: String,
    /// Identifier the price API uses for this asset (e.g. "bitcoin").
    pub provider_id: String,
}

impl Asset {
    pub fn new(ticker: impl Into<String>, provider_id: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            provider_id: provider_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_construction() {
        let asset = Asset::new("ETH", "ethereum");
        assert_eq!(asset.ticker, "ETH");
        assert_eq!(asset.provider_id, "ethereum");
    }
}
