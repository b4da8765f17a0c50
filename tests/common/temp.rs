use std::fs;
use std::path::{Path, PathBuf};

/// Temporary tree with `src/` and a not-yet-created `dst/`.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("cpdir_test")
            .tempdir()
            .unwrap_or_else(|e| panic!("Failed to create temp dir: {e}"));
        fs::create_dir(dir.path().join("src")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn src(&self) -> PathBuf {
        self.dir.path().join("src")
    }

    pub fn dst(&self) -> PathBuf {
        self.dir.path().join("dst")
    }

    /// Write `contents` to `src/<rel>`, creating parents.
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.src().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
        path
    }

    #[cfg(unix)]
    pub fn set_mode(&self, path: &Path, mode: u32) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .unwrap_or_else(|e| panic!("Failed to chmod {}: {e}", path.display()));
    }

    pub fn read_dst(&self, rel: &str) -> String {
        fs::read_to_string(self.dst().join(rel))
            .unwrap_or_else(|e| panic!("Failed to read dst/{rel}: {e}"))
    }
}
