//! Discovery: locate chat logs under the game's user directory.
//!
//! The client keeps one directory per character, named with a fixed prefix
//! (`FFXIV_CHR<id>`), and writes its chat logs into a `log/` directory inside
//! it:
//!
//! ```text
//! <root>/FFXIV_CHR0040000000000001/log/00000000.log
//! ```
//!
//! Only non-directory entries that sit directly inside such a `log/`
//! directory and carry the configured extension are sources.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use xivlog_core::config::DiscoveryConfig;

/// A `log/` directory with the sources found directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDir {
    /// Name of the character directory that owns this `log/` directory.
    pub character: String,
    pub path: PathBuf,
    /// Source files, sorted by name.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LogDiscovery {
    root: PathBuf,
    character_dir_prefix: String,
    log_dir_name: String,
    suffix: String,
}

impl LogDiscovery {
    pub fn new(root: impl Into<PathBuf>, cfg: &DiscoveryConfig) -> Self {
        Self {
            root: root.into(),
            character_dir_prefix: cfg.character_dir_prefix.clone(),
            log_dir_name: cfg.log_dir_name.clone(),
            suffix: format!(".{}", cfg.extension.trim_start_matches('.')),
        }
    }

    /// True if `dir` is a log directory inside a character directory.
    pub fn is_log_dir(&self, dir: &Path) -> bool {
        let named_log = dir
            .file_name()
            .is_some_and(|n| n.to_string_lossy() == self.log_dir_name.as_str());
        named_log
            && dir
                .parent()
                .and_then(Path::file_name)
                .is_some_and(|n| n.to_string_lossy().starts_with(&self.character_dir_prefix))
    }

    /// True if `path` would be picked up as a source, judging by its name and
    /// location only.
    pub fn is_source(&self, path: &Path) -> bool {
        let has_suffix = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(&self.suffix));
        has_suffix && path.parent().is_some_and(|dir| self.is_log_dir(dir))
    }

    /// Walk the root and group sources by log directory.
    ///
    /// Entries that cannot be read are logged and skipped. Symlinks are not
    /// followed, but a symlink inside a log directory is still listed as a
    /// source; reading it is the caller's problem.
    pub fn scan(&self) -> Vec<LogDir> {
        let mut dirs: BTreeMap<PathBuf, LogDir> = BTreeMap::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() || !self.is_source(entry.path()) {
                continue;
            }

            let Some(dir) = entry.path().parent() else {
                continue;
            };
            let log_dir = dirs.entry(dir.to_path_buf()).or_insert_with(|| LogDir {
                character: dir
                    .parent()
                    .and_then(Path::file_name)
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: dir.to_path_buf(),
                files: Vec::new(),
            });
            log_dir.files.push(entry.path().to_path_buf());
        }

        let mut out: Vec<LogDir> = dirs.into_values().collect();
        for dir in &mut out {
            dir.files.sort();
        }
        tracing::debug!(
            root = %self.root.display(),
            dirs = out.len(),
            files = out.iter().map(|d| d.files.len()).sum::<usize>(),
            "discovery finished"
        );
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
