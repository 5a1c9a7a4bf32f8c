//! Export: routes dialogue records to per-character and catch-all files.
//!
//! A [`Router`] owns every output file for the duration of a run. Files are
//! created (truncated) when the router is opened, written through a
//! `BufWriter`, and flushed by [`Router::finish`]. Dropping the router without
//! calling `finish` still closes every file.
//!
//! # File names
//!
//! Each tracked name maps to `<sanitized>.txt`, where characters outside word
//! characters, `-`, `_`, `.` and space become `_`, and spaces become `_`.
//! The catch-all stream is `<catch_all>.txt`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, Result};
use crate::types::{DialogueRecord, StreamKey};

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\-_. ]").expect("filename pattern must compile")
});

/// Make `name` safe to use as a file stem on Windows and Unix.
pub fn sanitize_filename(name: &str) -> String {
    UNSAFE_FILENAME_CHARS
        .replace_all(name, "_")
        .replace(' ', "_")
}

/// Stream key for `actor`: its own stream if tracked, else the catch-all.
pub fn route(tracked: &HashSet<String>, actor: &str) -> StreamKey {
    if tracked.contains(actor) {
        StreamKey::Tracked(actor.to_string())
    } else {
        StreamKey::CatchAll
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

struct Stream {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: u64,
}

/// Lines written to one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    pub key: StreamKey,
    pub path: PathBuf,
    pub lines: u64,
}

pub struct Router {
    tracked: HashSet<String>,
    streams: BTreeMap<StreamKey, Stream>,
}

impl Router {
    /// Create `dir` if needed and open one truncated file per tracked name
    /// plus the catch-all file.
    ///
    /// Blank tracked names are ignored and duplicates collapse. Two names
    /// that sanitize to the same file, or to the catch-all file, are an
    /// error and nothing is opened.
    pub fn open(dir: &Path, tracked: &[String], catch_all: &str) -> Result<Self> {
        let catch_all_file = format!("{}.txt", sanitize_filename(catch_all));

        let mut plan: Vec<(StreamKey, String)> = Vec::new();
        let mut owners: HashMap<String, String> = HashMap::new();
        owners.insert(catch_all_file.clone(), catch_all.to_string());

        for name in tracked {
            if name.trim().is_empty() {
                tracing::warn!("ignoring blank tracked name");
                continue;
            }
            if plan.iter().any(|(k, _)| *k == StreamKey::Tracked(name.clone())) {
                continue;
            }
            let file = format!("{}.txt", sanitize_filename(name));
            if let Some(first) = owners.get(&file) {
                return Err(ExtractError::OutputCollision {
                    first: first.clone(),
                    second: name.clone(),
                    file,
                });
            }
            owners.insert(file.clone(), name.clone());
            plan.push((StreamKey::Tracked(name.clone()), file));
        }
        plan.push((StreamKey::CatchAll, catch_all_file));

        std::fs::create_dir_all(dir).map_err(|source| ExtractError::Output {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut streams = BTreeMap::new();
        for (key, file) in plan {
            let path = dir.join(file);
            let handle = File::create(&path).map_err(|source| ExtractError::Output {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(stream = %key, path = %path.display(), "output opened");
            streams.insert(
                key,
                Stream {
                    path,
                    writer: BufWriter::new(handle),
                    lines: 0,
                },
            );
        }

        let tracked = streams
            .keys()
            .filter_map(|k| match k {
                StreamKey::Tracked(name) => Some(name.clone()),
                StreamKey::CatchAll => None,
            })
            .collect();

        Ok(Self { tracked, streams })
    }

    pub fn route(&self, actor: &str) -> StreamKey {
        route(&self.tracked, actor)
    }

    /// Append `record` as one `"<actor>: <message>"` line to its stream.
    pub fn write(&mut self, record: &DialogueRecord) -> Result<StreamKey> {
        let key = self.route(&record.actor);
        let stream = match self.streams.get_mut(&key) {
            Some(stream) => stream,
            None => unreachable!("router has no stream for {key}"),
        };
        writeln!(stream.writer, "{record}")?;
        stream.lines += 1;
        Ok(key)
    }

    pub fn path(&self, key: &StreamKey) -> Option<&Path> {
        self.streams.get(key).map(|s| s.path.as_path())
    }

    pub fn total_lines(&self) -> u64 {
        self.streams.values().map(|s| s.lines).sum()
    }

    /// Flush and close every file.
    pub fn finish(self) -> Result<Vec<StreamSummary>> {
        let mut summaries = Vec::with_capacity(self.streams.len());
        for (key, mut stream) in self.streams {
            stream.writer.flush().map_err(|source| ExtractError::Output {
                path: stream.path.clone(),
                source,
            })?;
            summaries.push(StreamSummary {
                key,
                path: stream.path,
                lines: stream.lines,
            });
        }
        Ok(summaries)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
