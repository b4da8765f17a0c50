//! Copy engine behind the `cpdir` command.
//!
//! - `path`   : entry model and path joining
//! - `file`   : single-file byte and mode copy
//! - `walker` : recursive directory mirror
//! - `options`, `report`, `error` : run configuration, results, failures
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod file;
pub mod options;
pub mod path;
pub mod report;
pub mod walker;

pub use error::{CopyError, HandleKind, Result};
pub use file::{copy_file, copy_file_with};
pub use options::{CopyOptions, CopyOptionsBuilder, DirMode, ErrorPolicy};
pub use path::{Entry, EntryKind, build_path};
pub use report::{CopyFailure, CopyReport};
pub use walker::{copy_directory, copy_directory_with};
