//! Test builders: on-disk game directory trees.
//!
//! These are designed for readability in tests, not for production use.
//! They panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builds a temporary game user directory:
///
/// ```rust
/// let tree = GameTreeBuilder::new()
///     .log("FFXIV_CHR01", "00000001.log", BLOB_SESSION)
///     .build();
/// ```
pub struct GameTreeBuilder {
    dir: TempDir,
}

impl GameTreeBuilder {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Write `bytes` to `<root>/<character>/log/<file>`.
    pub fn log(self, character: &str, file: &str, bytes: &[u8]) -> Self {
        self.file(&format!("{character}/log/{file}"), bytes)
    }

    /// Write `bytes` to an arbitrary path under the root.
    pub fn file(self, rel: &str, bytes: &[u8]) -> Self {
        let path = self.dir.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).expect("create parent dirs");
        std::fs::write(&path, bytes).expect("write fixture file");
        self
    }

    /// A `.log` entry that exists in the directory listing but cannot be read.
    #[cfg(unix)]
    pub fn unreadable_log(self, character: &str, file: &str) -> Self {
        let path = self.dir.path().join(character).join("log").join(file);
        std::fs::create_dir_all(path.parent().unwrap()).expect("create parent dirs");
        std::os::unix::fs::symlink(self.dir.path().join("does-not-exist"), &path)
            .expect("create dangling symlink");
        self
    }

    pub fn build(self) -> GameTree {
        GameTree { dir: self.dir }
    }
}

/// A built tree. The directory is removed when this is dropped.
pub struct GameTree {
    dir: TempDir,
}

impl GameTree {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A fresh output directory path inside the tree (not created).
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("Cleaned_Logs")
    }
}
