use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration, source reading and output failures.
///
/// Classification never produces an error: an actor without a plausible
/// message simply yields no record.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no input directory configured (set paths.input or pass --input)")]
    NoInput,
    #[error("input directory not found: {}", .0.display())]
    InputMissing(PathBuf),
    #[error("tracked names {first:?} and {second:?} both map to output file {file:?}")]
    OutputCollision {
        first: String,
        second: String,
        file: String,
    },
    #[error("failed to open output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
