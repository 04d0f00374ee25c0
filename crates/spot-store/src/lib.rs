//! Plain-text price log store for spotwatch.
//!
//! Two files per (asset, fiat) pair: a "recent" log holding exactly the
//! latest observation (overwritten each run) and an append-only "historic"
//! log of every observation. The human-readable line format doubles as the
//! storage format; the last price is parsed back out with a text pattern,
//! so files written by older versions of the tool remain readable.

pub mod error;
pub mod log_store;

pub use error::{StoreError, StoreResult};
pub use log_store::{PriceLogStore, StoreConfig};
