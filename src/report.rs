//! Run report: counters collected during one extraction.
//!
//! The [`Display`](std::fmt::Display) impl is the console summary; the same
//! data can be written as JSON with [`RunReport::write_json`].

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use xivlog_core::export::StreamSummary;
use xivlog_core::{ExtractError, StreamKey};

use crate::ingestor::FileStats;

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub input: PathBuf,
    pub output: PathBuf,
    pub directories_scanned: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    /// Lines written over all streams, set by [`RunReport::finish`]. Includes
    /// lines a failed file wrote before its error.
    pub records: u64,
    pub tokens: u64,
    /// Invalid UTF-8 bytes dropped while decoding, over all files.
    pub bytes_substituted: u64,
    pub streams: Vec<StreamReport>,
    pub failures: Vec<FileFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamReport {
    /// Tracked name, or `null` for the catch-all stream.
    pub name: Option<String>,
    pub path: PathBuf,
    pub lines: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

impl RunReport {
    pub fn new(input: &Path, output: &Path) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            directories_scanned: 0,
            files_processed: 0,
            files_failed: 0,
            records: 0,
            tokens: 0,
            bytes_substituted: 0,
            streams: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record_file(&mut self, stats: &FileStats) {
        self.files_processed += 1;
        self.tokens += stats.tokens as u64;
        self.bytes_substituted += stats.substituted as u64;
    }

    pub fn record_failure(&mut self, path: &Path, err: &ExtractError) {
        self.files_failed += 1;
        self.failures.push(FileFailure {
            path: path.to_path_buf(),
            error: err.to_string(),
        });
    }

    pub fn finish(&mut self, streams: Vec<StreamSummary>) {
        self.records = streams.iter().map(|s| s.lines).sum();
        self.streams = streams
            .into_iter()
            .map(|s| StreamReport {
                name: match s.key {
                    StreamKey::Tracked(name) => Some(name),
                    StreamKey::CatchAll => None,
                },
                path: s.path,
                lines: s.lines,
            })
            .collect();
        self.finished_at = Some(Utc::now());
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(io::Error::from)?;
        writeln!(writer)?;
        writer.flush()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extraction complete.")?;
        writeln!(
            f,
            "Scanned {} director{}, {} file{} ({} failed).",
            self.directories_scanned,
            if self.directories_scanned == 1 { "y" } else { "ies" },
            self.files_processed + self.files_failed,
            if self.files_processed + self.files_failed == 1 { "" } else { "s" },
            self.files_failed,
        )?;
        writeln!(f, "Total lines extracted: {}", self.records)?;
        for stream in &self.streams {
            let name = stream.name.as_deref().unwrap_or("(everyone else)");
            writeln!(f, "  {name}: {} -> {}", stream.lines, stream.path.display())?;
        }
        write!(f, "Files saved to: {}", self.output.display())
    }
}
