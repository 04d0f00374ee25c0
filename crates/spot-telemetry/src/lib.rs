//! Structured logging for spotwatch.
//!
//! Diagnostics go through `tracing` to stderr; quote output owns stdout.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
