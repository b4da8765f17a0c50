// crates/core/src/report.rs
//! Counters and failures collected over one copy run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::CopyError;

/// One failed operation, flattened for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyFailure {
    pub kind: &'static str,
    pub path: PathBuf,
    pub message: String,
}

impl From<&CopyError> for CopyFailure {
    fn from(err: &CopyError) -> Self {
        Self {
            kind: err.kind(),
            path: err.path().to_path_buf(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct CopyReport {
    pub files_copied: u64,
    pub dirs_created: u64,
    pub bytes_copied: u64,
    /// Dot-directories and entries that are neither files nor directories.
    pub entries_skipped: u64,
    pub errors: Vec<CopyFailure>,
}

impl CopyReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn record_file(&mut self, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
    }

    pub(crate) fn record_dir(&mut self) {
        self.dirs_created += 1;
    }

    pub(crate) fn record_skip(&mut self) {
        self.entries_skipped += 1;
    }

    pub(crate) fn record_error(&mut self, err: &CopyError) {
        self.errors.push(CopyFailure::from(err));
    }
}

impl fmt::Display for CopyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "files={} dirs={} bytes={} skipped={} errors={}",
            self.files_copied,
            self.dirs_created,
            self.bytes_copied,
            self.entries_skipped,
            self.errors.len()
        )
    }
}
