// crates/core/src/options.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Buffer used for the read/write loop of a single file.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Mode used for new destination directories under [`DirMode::Fixed`]: `rwxr-x--x`.
pub const FIXED_DIR_MODE: u32 = 0o751;

/// What happens to the rest of the walk after a failed operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Record the failure in the report and keep copying.
    Continue,
}

/// How permissions of newly created destination directories are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirMode {
    /// Mirror the source directory's mode, applied once its children are copied.
    #[default]
    Source,
    /// Always create with [`FIXED_DIR_MODE`], subject to the process umask.
    Fixed,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct CopyOptions {
    #[builder(default)]
    pub on_error: ErrorPolicy,
    #[builder(default)]
    pub dir_mode: DirMode,
    #[builder(default = "DEFAULT_BUFFER_SIZE")]
    pub buffer_size: usize,
    /// `sync_all` each destination file before it is closed.
    #[builder(default = "true")]
    pub sync_files: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Abort,
            dir_mode: DirMode::Source,
            buffer_size: DEFAULT_BUFFER_SIZE,
            sync_files: true,
        }
    }
}
