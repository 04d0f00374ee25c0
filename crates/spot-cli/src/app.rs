//! Run orchestration.
//!
//! One bulk fetch covering the configured assets, then per asset in
//! declared order: read the previously recorded price, compute the change,
//! print the quote, persist the new observation.

use crate::config::AppConfig;
use crate::error::AppResult;
use rust_decimal::Decimal;
use spot_core::{percent_change, CoreError, Price, PriceObservation};
use spot_fetch::{PriceFetcher, PriceMap};
use spot_store::PriceLogStore;
use tracing::{debug, error, warn};

/// One rendered quote.
#[derive(Debug, Clone)]
pub struct Quote {
    pub ticker: String,
    pub price: Price,
    /// Percent change since the previous observation, when one exists.
    pub change: Option<Decimal>,
}

impl Quote {
    /// Display line: `1 BTC = 43250.12 USD (1.25% since last update)`.
    pub fn display_line(&self, fiat: &str) -> String {
        match self.change {
            Some(change) => format!(
                "1 {} = {} {} ({}% since last update)",
                self.ticker, self.price, fiat, change
            ),
            None => format!("1 {} = {} {}", self.ticker, self.price, fiat),
        }
    }
}

/// Main application.
pub struct Application {
    config: AppConfig,
    fetcher: PriceFetcher,
    store: PriceLogStore,
}

impl Application {
    /// Create the application, bootstrapping the data directory.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let fetcher = PriceFetcher::new(config.fetcher.clone())?;
        let store = PriceLogStore::open(&config.store, &config.fiat)?;

        Ok(Self {
            config,
            fetcher,
            store,
        })
    }

    /// Fetch prices and report them.
    ///
    /// A failed fetch yields no data for this run: it is logged and the run
    /// completes with nothing to report. With `bare`, a trailing listing of
    /// just the numeric prices is printed in the same order.
    pub async fn run(&self, bare: bool) -> AppResult<()> {
        println!();
        println!("Current spot prices");
        println!("===================");

        let prices = match self.fetcher.fetch_all(&self.config.fiat).await {
            Ok(prices) => prices,
            Err(e) => {
                error!(error = %e, "Price fetch failed, nothing to report this run");
                PriceMap::new()
            }
        };

        let quotes = self.quote_all(&prices);
        for quote in &quotes {
            println!("{}", quote.display_line(&self.config.fiat));
        }

        if bare {
            println!();
            for quote in &quotes {
                println!("{}", quote.price);
            }
        }
        println!();

        Ok(())
    }

    /// Compare, record, and render every configured asset the price map
    /// resolves, preserving the configured order.
    ///
    /// Assets the fetch did not resolve are skipped without a quote line.
    /// A store write failure loses this run's observation for that asset
    /// but does not stop the remaining assets.
    pub fn quote_all(&self, prices: &PriceMap) -> Vec<Quote> {
        let mut quotes = Vec::new();

        for asset in &self.config.assets {
            let raw = match prices.get(&asset.provider_id) {
                Some(raw) => raw,
                None => {
                    debug!(
                        ticker = %asset.ticker,
                        provider_id = %asset.provider_id,
                        "No price in fetch result"
                    );
                    continue;
                }
            };

            let price = match raw.parse::<Price>() {
                Ok(price) => price,
                Err(e) => {
                    warn!(ticker = %asset.ticker, raw = %raw, error = %e, "Unparsable price string");
                    continue;
                }
            };

            let change = self.change_since_last(&asset.ticker, price);

            let observation = PriceObservation::now(&asset.ticker, &self.config.fiat, price);
            if let Err(e) = self.store.append_observation(&observation) {
                warn!(ticker = %asset.ticker, error = %e, "Failed to record observation");
            }

            quotes.push(Quote {
                ticker: asset.ticker.clone(),
                price,
                change,
            });
        }

        quotes
    }

    /// Percent change against the recorded price, when one exists.
    ///
    /// A recorded price of zero cannot anchor a comparison; it is logged
    /// and rendered the same as a first run.
    fn change_since_last(&self, ticker: &str, current: Price) -> Option<Decimal> {
        let previous = self.store.read_recent_price(ticker)?;

        match percent_change(previous, current) {
            Ok(change) => Some(change),
            Err(CoreError::ZeroBaseline) => {
                warn!(ticker, "Recorded price is zero, treating as no prior data");
                None
            }
            Err(e) => {
                warn!(ticker, error = %e, "Percent change unavailable");
                None
            }
        }
    }
}
