// crates/core/src/error.rs
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Which kind of handle failed to close. Directory listings are released on
/// drop and cannot report a failure, so only files appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    File,
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("Error closing file."),
        }
    }
}

/// System error text without the ` (os error N)` suffix std appends.
fn describe(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {code})"))
            .map(str::to_owned)
            .unwrap_or(text),
        None => text,
    }
}

/// Failure of one filesystem operation during a copy.
///
/// The `Display` form is `<path>: <system error description>`, which the CLI
/// prefixes with the program name.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The source could not be opened, listed, read, or queried for metadata.
    #[error("{}: {}", path.display(), describe(source))]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be created or opened for writing.
    #[error("{}: {}", path.display(), describe(source))]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write failed or transferred fewer bytes than requested.
    #[error("{}: {}", path.display(), describe(source))]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A handle could not be finalized after its data was transferred.
    #[error("{handle}: {}", describe(source))]
    CloseError {
        handle: HandleKind,
        /// Path of the handle, kept for the report; not part of the message.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopyError {
    pub(crate) fn source_unavailable(path: &Path, source: io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn destination_unavailable(path: &Path, source: io::Error) -> Self {
        Self::DestinationUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write_error(path: &Path, source: io::Error) -> Self {
        Self::WriteError {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn close_error(handle: HandleKind, path: &Path, source: io::Error) -> Self {
        Self::CloseError {
            handle,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the failed operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceUnavailable { path, .. }
            | Self::DestinationUnavailable { path, .. }
            | Self::WriteError { path, .. }
            | Self::CloseError { path, .. } => path,
        }
    }

    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::DestinationUnavailable { .. } => "destination_unavailable",
            Self::WriteError { .. } => "write_error",
            Self::CloseError { .. } => "close_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, CopyError>;
