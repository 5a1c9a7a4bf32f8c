//! Core types for xivlog-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! raw input [`RawBlob`], the ephemeral [`Token`], the emitted
//! [`DialogueRecord`], and the [`StreamKey`] used to route records.

use std::fmt;
use std::path::PathBuf;

/// Raw bytes of one source log file, consumed once by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlob {
    /// Where the bytes came from. Used for diagnostics only.
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl RawBlob {
    pub fn new(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }
}

/// A normalised chunk of decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Position of this token in the blob's token sequence.
    pub source_index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, source_index: usize) -> Self {
        Self {
            text: text.into(),
            source_index,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// One recovered line of dialogue.
///
/// Only produced when `actor` passed actor validation and `message` passed
/// message validation at the time of emission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogueRecord {
    pub actor: String,
    pub message: String,
}

impl DialogueRecord {
    pub fn new(actor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            message: message.into(),
        }
    }
}

/// Renders the output line body, without the trailing newline.
impl fmt::Display for DialogueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.actor, self.message)
    }
}

/// Logical output stream a record is routed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StreamKey {
    /// A tracked character name, matched exactly against the actor.
    Tracked(String),
    /// Shared stream for every untracked actor.
    CatchAll,
}

impl fmt::Display for StreamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKey::Tracked(name) => write!(f, "{name}"),
            StreamKey::CatchAll => write!(f, "catch-all"),
        }
    }
}
