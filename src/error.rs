// src/error.rs
use std::path::PathBuf;

use cpdir_core::CopyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error(
        "{}: destination lies inside the source tree {}",
        destination_dir.display(),
        source_dir.display()
    )]
    Overlap {
        source_dir: PathBuf,
        destination_dir: PathBuf,
    },

    /// Keep-going run finished with failures; each one was already printed.
    #[error("{failed} operation(s) failed")]
    Incomplete { failed: usize },

    #[error("JSON error: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
