//! xivlog: recover roleplay dialogue from binary FFXIV chat logs.
//!
//! The game client writes chat to partially binary `.log` files with no
//! reliable schema. This crate drives one extraction run: it discovers the
//! logs under a game user directory, pairs speaker names with their lines
//! using the heuristics in [`xivlog_core`], and writes each recovered line to
//! a per-character file or a shared catch-all file.
//!
//! # Architecture
//!
//! ```text
//! Discovery ──► read_blob ──► Pipeline ──► Router
//!  (feeds)       (feeds)       (core)      (core::export)
//!                                 │
//!                                 └──► RunReport
//! ```
//!
//! Files are processed one at a time, in a stable order, on the calling
//! thread. A file that cannot be read is reported and skipped; it never
//! aborts the run.

pub mod ingestor;
pub mod report;

pub use ingestor::{run, FileStats, Ingestor};
pub use report::RunReport;
pub use xivlog_core::{config::Config, DialogueRecord, ExtractError, Lexicon, Pipeline, StreamKey};
