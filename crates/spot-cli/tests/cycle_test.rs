//! End-to-end quote/record cycles against a temporary data directory.
//!
//! Drives `Application::quote_all` with fabricated fetch results, the same
//! seam `run` feeds it from the live endpoint.

use rust_decimal_macros::dec;
use spot_cli::{AppConfig, Application};
use spot_core::Asset;
use spot_fetch::PriceMap;
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.assets = vec![
        Asset::new("BTC", "bitcoin"),
        Asset::new("ETH", "ethereum"),
    ];
    config.store.data_dir = dir.path().join("prices").to_string_lossy().into_owned();
    config
}

fn price_map(entries: &[(&str, &str)]) -> PriceMap {
    entries
        .iter()
        .map(|(id, price)| (id.to_string(), price.to_string()))
        .collect()
}

#[test]
fn first_run_has_no_change_suffix_and_seeds_baseline() {
    let dir = TempDir::new().unwrap();
    let app = Application::new(test_config(&dir)).unwrap();

    let quotes = app.quote_all(&price_map(&[
        ("bitcoin", "43250.12"),
        ("ethereum", "2201.50"),
    ]));

    assert_eq!(quotes.len(), 2);
    assert!(quotes.iter().all(|q| q.change.is_none()));
    assert_eq!(quotes[0].display_line("USD"), "1 BTC = 43250.12 USD");

    assert!(dir.path().join("prices/BTC-USD-recent.txt").exists());
    assert!(dir.path().join("prices/ETH-USD-historic.txt").exists());
}

#[test]
fn second_run_reports_change_since_first() {
    let dir = TempDir::new().unwrap();
    let app = Application::new(test_config(&dir)).unwrap();

    app.quote_all(&price_map(&[("bitcoin", "100.00"), ("ethereum", "2000")]));
    let quotes = app.quote_all(&price_map(&[("bitcoin", "105.00"), ("ethereum", "1900")]));

    let btc = quotes.iter().find(|q| q.ticker == "BTC").unwrap();
    assert_eq!(btc.change, Some(dec!(5)));
    assert_eq!(
        btc.display_line("USD"),
        "1 BTC = 105.00 USD (5% since last update)"
    );

    let eth = quotes.iter().find(|q| q.ticker == "ETH").unwrap();
    assert_eq!(eth.change, Some(dec!(-5)));
}

#[test]
fn missing_asset_is_skipped_without_a_quote() {
    let dir = TempDir::new().unwrap();
    let app = Application::new(test_config(&dir)).unwrap();

    let quotes = app.quote_all(&price_map(&[("bitcoin", "43250.12")]));

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].ticker, "BTC");
    assert!(!dir.path().join("prices/ETH-USD-recent.txt").exists());
}

#[test]
fn unparsable_price_string_is_skipped() {
    let dir = TempDir::new().unwrap();
    let app = Application::new(test_config(&dir)).unwrap();

    let quotes = app.quote_all(&price_map(&[
        ("bitcoin", "n/a"),
        ("ethereum", "2201.50"),
    ]));

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].ticker, "ETH");
    assert!(!dir.path().join("prices/BTC-USD-recent.txt").exists());
}

#[test]
fn quotes_preserve_configured_asset_order() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir);
    config.assets = vec![
        Asset::new("ETH", "ethereum"),
        Asset::new("BTC", "bitcoin"),
    ];
    let app = Application::new(config).unwrap();

    let quotes = app.quote_all(&price_map(&[
        ("bitcoin", "43250.12"),
        ("ethereum", "2201.50"),
    ]));

    let tickers: Vec<&str> = quotes.iter().map(|q| q.ticker.as_str()).collect();
    assert_eq!(tickers, ["ETH", "BTC"]);
}

#[test]
fn historic_log_accumulates_across_runs() {
    let dir = TempDir::new().unwrap();
    let app = Application::new(test_config(&dir)).unwrap();

    app.quote_all(&price_map(&[("bitcoin", "100")]));
    app.quote_all(&price_map(&[("bitcoin", "101")]));
    app.quote_all(&price_map(&[("bitcoin", "102")]));

    let historic =
        std::fs::read_to_string(dir.path().join("prices/BTC-USD-historic.txt")).unwrap();
    assert_eq!(historic.lines().count(), 3);

    let recent = std::fs::read_to_string(dir.path().join("prices/BTC-USD-recent.txt")).unwrap();
    assert_eq!(recent.lines().count(), 1);
    assert!(recent.contains("= 102 USD"));
}

#[test]
fn zero_recorded_price_renders_like_a_first_run() {
    let dir = TempDir::new().unwrap();
    let app = Application::new(test_config(&dir)).unwrap();

    app.quote_all(&price_map(&[("bitcoin", "0")]));
    let quotes = app.quote_all(&price_map(&[("bitcoin", "100")]));

    assert_eq!(quotes.len(), 1);
    assert!(quotes[0].change.is_none());
    assert_eq!(quotes[0].display_line("USD"), "1 BTC = 100 USD");
}
