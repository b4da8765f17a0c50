// crates/core/src/walker.rs
use std::fs::{self, Permissions};
use std::path::Path;

use log::{debug, trace};

use crate::error::{CopyError, Result};
use crate::file::copy_file_with;
use crate::options::{CopyOptions, DirMode, ErrorPolicy};
use crate::path::{Entry, EntryKind, build_path};
use crate::report::CopyReport;

/// Mirror the directory tree at `source` into `destination` with default options.
///
/// # Errors
/// See [`copy_directory_with`].
pub fn copy_directory(source: &Path, destination: &Path) -> Result<CopyReport> {
    copy_directory_with(source, destination, &CopyOptions::default())
}

/// Mirror the directory tree at `source` into `destination`.
///
/// Directories whose name starts with `.` are not descended into. Regular
/// files are copied whether hidden or not. Symlinks and special files are
/// skipped. Entries are visited in the order the filesystem lists them.
///
/// # Errors
/// With [`ErrorPolicy::Abort`] the first failure is returned and nothing after
/// it is attempted. With [`ErrorPolicy::Continue`] this only returns `Ok`;
/// failures are listed in [`CopyReport::errors`].
pub fn copy_directory_with(
    source: &Path,
    destination: &Path,
    options: &CopyOptions,
) -> Result<CopyReport> {
    let mut walker = Walker {
        options,
        report: CopyReport::default(),
    };
    walker.copy_dir(source, destination)?;
    Ok(walker.report)
}

struct Walker<'a> {
    options: &'a CopyOptions,
    report: CopyReport,
}

impl Walker<'_> {
    /// Applies the error policy: `Err` only when the walk must stop.
    fn settle(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => match self.options.on_error {
                ErrorPolicy::Abort => Err(err),
                ErrorPolicy::Continue => {
                    debug!("continuing after error: {err}");
                    self.report.record_error(&err);
                    Ok(())
                }
            },
        }
    }

    fn copy_dir(&mut self, source: &Path, destination: &Path) -> Result<()> {
        let state = match self.ensure_destination(destination) {
            Ok(state) => state,
            Err(err) => return self.settle(Err(err)),
        };

        let meta = match fs::metadata(source) {
            Ok(meta) => meta,
            Err(e) => return self.settle(Err(CopyError::source_unavailable(source, e))),
        };

        let listing = match fs::read_dir(source) {
            Ok(listing) => listing,
            Err(e) => return self.settle(Err(CopyError::source_unavailable(source, e))),
        };

        debug!("copying {} -> {}", source.display(), destination.display());

        for item in listing {
            let entry = match item.and_then(|de| Entry::from_dir_entry(&de)) {
                Ok(entry) => entry,
                Err(e) => {
                    // A listing that failed once is not read further.
                    self.settle(Err(CopyError::source_unavailable(source, e)))?;
                    break;
                }
            };

            match entry.kind {
                EntryKind::Directory if !entry.is_hidden() => {
                    let src = build_path(source, &entry);
                    let dst = build_path(destination, &entry);
                    self.copy_dir(&src, &dst)?;
                }
                EntryKind::File => {
                    let src = build_path(source, &entry);
                    let dst = build_path(destination, &entry);
                    let copied = copy_file_with(&src, &dst, self.options)
                        .map(|bytes| self.report.record_file(bytes));
                    self.settle(copied)?;
                }
                EntryKind::Directory | EntryKind::Other => {
                    trace!("skipping {}", build_path(source, &entry).display());
                    self.report.record_skip();
                }
            }
        }

        let final_permissions = match (state, self.options.dir_mode) {
            (DirState::Created, DirMode::Source) | (DirState::Lifted(_), DirMode::Source) => {
                Some(meta.permissions())
            }
            (DirState::Lifted(original), DirMode::Fixed) => Some(original),
            (DirState::Created, DirMode::Fixed) | (DirState::Reused, _) => None,
        };
        if let Some(permissions) = final_permissions {
            let applied = fs::set_permissions(destination, permissions)
                .map_err(|e| CopyError::destination_unavailable(destination, e));
            self.settle(applied)?;
        }

        Ok(())
    }

    fn ensure_destination(&mut self, destination: &Path) -> Result<DirState> {
        if let Ok(meta) = fs::metadata(destination)
            && meta.is_dir()
        {
            return reuse_destination(destination, meta.permissions());
        }

        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        if self.options.dir_mode == DirMode::Fixed {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(crate::options::FIXED_DIR_MODE);
        }
        builder
            .create(destination)
            .map_err(|e| CopyError::destination_unavailable(destination, e))?;

        debug!("created {}", destination.display());
        self.report.record_dir();
        Ok(DirState::Created)
    }
}

/// How the destination directory of one recursion step came to exist.
enum DirState {
    Created,
    /// Existed and is left as found.
    Reused,
    /// Existed without owner write permission; holds the mode it had.
    Lifted(Permissions),
}

/// Existing directories are kept as they are unless the owner cannot write
/// into them, in which case owner write is added until the copy is done.
fn reuse_destination(destination: &Path, permissions: Permissions) -> Result<DirState> {
    #[cfg(unix)]
    let writable = {
        use std::os::unix::fs::PermissionsExt;
        permissions.mode() & 0o200 != 0
    };
    #[cfg(not(unix))]
    let writable = !permissions.readonly();

    if writable {
        return Ok(DirState::Reused);
    }

    #[cfg(unix)]
    let lifted = {
        use std::os::unix::fs::PermissionsExt;
        Permissions::from_mode(permissions.mode() | 0o200)
    };
    #[cfg(not(unix))]
    let lifted = {
        let mut lifted = permissions.clone();
        lifted.set_readonly(false);
        lifted
    };
    fs::set_permissions(destination, lifted)
        .map_err(|e| CopyError::destination_unavailable(destination, e))?;
    debug!("added owner write to {}", destination.display());
    Ok(DirState::Lifted(permissions))
}
