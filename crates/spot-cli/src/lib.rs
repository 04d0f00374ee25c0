//! spotwatch application: configuration, orchestration, and error types.

pub mod app;
pub mod config;
pub mod error;

pub use app::{Application, Quote};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
