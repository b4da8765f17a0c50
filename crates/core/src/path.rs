// crates/core/src/path.rs
use std::ffi::{OsStr, OsString};
use std::fs::{DirEntry, FileType};
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Type of a directory entry as reported by the listing, without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, devices, sockets, fifos.
    Other,
}

impl From<FileType> for EntryKind {
    fn from(ft: FileType) -> Self {
        if ft.is_dir() {
            Self::Directory
        } else if ft.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// One named entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Reads name and type from a listing entry. `DirEntry::file_type` does not
    /// follow symbolic links, so a link to a directory is `Other`.
    pub fn from_dir_entry(entry: &DirEntry) -> io::Result<Self> {
        Ok(Self {
            name: entry.file_name(),
            kind: entry.file_type()?.into(),
        })
    }

    /// Names beginning with `.`, which covers `.`, `..` and hidden entries.
    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

fn ends_with_separator(path: &OsStr) -> bool {
    path.as_encoded_bytes()
        .last()
        .is_some_and(|b| std::path::is_separator(char::from(*b)))
}

/// Joins `base` and the entry name with exactly one separator between them.
/// Directories get a trailing separator.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use cpdir_core::path::{build_path, Entry, EntryKind};
///
/// let file = Entry::new("a.txt", EntryKind::File);
/// assert_eq!(build_path(Path::new("src"), &file), PathBuf::from("src/a.txt"));
///
/// let dir = Entry::new("sub", EntryKind::Directory);
/// assert_eq!(build_path(Path::new("src/"), &dir), PathBuf::from("src/sub/"));
/// ```
pub fn build_path(base: &Path, entry: &Entry) -> PathBuf {
    let base = base.as_os_str();
    let mut path = OsString::with_capacity(base.len() + entry.name.len() + 2);
    path.push(base);
    if !base.is_empty() && !ends_with_separator(base) {
        path.push(MAIN_SEPARATOR.to_string());
    }
    path.push(&entry.name);
    if entry.is_dir() {
        path.push(MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(path)
}
