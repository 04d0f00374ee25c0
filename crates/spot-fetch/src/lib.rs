//! HTTP price listing client for spotwatch.
//!
//! One bulk GET against the provider's listing endpoint, parsed into a
//! provider-id -> price-string map. The caller awaits the single request to
//! completion, so at most one request is ever in flight.

pub mod client;
pub mod error;

pub use client::{FetcherConfig, PriceFetcher, PriceMap};
pub use error::{FetchError, FetchResult};
