//! Core domain types for the spotwatch price watcher.
//!
//! This crate provides the fundamental types shared across the system:
//! - `Asset`: a watched asset (display ticker + provider id)
//! - `Price`: precision-safe spot price
//! - `PriceObservation`: one timestamped quote, with its log-line rendering
//! - `percent_change`: change against the previously recorded price

pub mod asset;
pub mod change;
pub mod error;
pub mod observation;
pub mod price;

pub use asset::Asset;
pub use change::percent_change;
pub use error::{CoreError, Result};
pub use observation::PriceObservation;
pub use price::Price;
