//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data path exists and is not a directory: {}", .0.display())]
    DataDirIsFile(PathBuf),
}

pub type StoreResult<T> = Result<T, StoreError>;
