//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] spot_fetch::FetchError),

    #[error("Store error: {0}")]
    Store(#[from] spot_store::StoreError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] spot_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
