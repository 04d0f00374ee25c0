//! Timestamped price observations and their log-line rendering.

use crate::price::Price;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One spot price observation for a watched asset.
///
/// Immutable once created; the store overwrites the recent log with it and
/// appends it to the historic log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceObservation {
    pub ticker: String,
    pub fiat: String,
    pub price: Price,
    pub timestamp: DateTime<Utc>,
}

impl PriceObservation {
    /// Observation stamped with the current UTC time.
    pub fn now(ticker: impl Into<String>, fiat: impl Into<String>, price: Price) -> Self {
        Self {
            ticker: ticker.into(),
            fiat: fiat.into(),
            price,
            timestamp: Utc::now(),
        }
    }

    /// The quote portion shown to the user: `1 BTC = 43250.12 USD`.
    pub fn quote_line(&self) -> String {
        format!("1 {} = {} {}", self.ticker, self.price, self.fiat)
    }

    /// The full on-disk line: `2026-08-06T09:15:02Z: 1 BTC = 43250.12 USD`.
    ///
    /// The `= <price> <FIAT>` segment is what the store's read-back regex
    /// extracts, so the rendering here and the pattern there must agree.
    pub fn log_line(&self) -> String {
        format!(
            "{}: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.quote_line()
        )
    }
}
