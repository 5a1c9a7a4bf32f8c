//! xivlog-core: dialogue recovery for binary FFXIV chat logs.
//!
//! This crate exposes the classification-and-pairing pipeline as public
//! modules, plus the output router and the shared types used across layers.
//!
//! # Architecture
//!
//! ```text
//! Lexicon ──► Classifier ──┐
//!                          ├──► Pipeline ──► Router (export)
//! Normalizer ──────────────┘
//! ```
//!
//! Everything here is synchronous and free of global state. The lexicon is
//! built once and borrowed by the classifier; the pipeline borrows the
//! classifier. File discovery lives in `xivlog-feeds`.

pub mod classifier;
pub mod config;
pub mod error;
pub mod export;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod types;

pub use classifier::Classifier;
pub use error::{ExtractError, Result};
pub use lexicon::Lexicon;
pub use pipeline::Pipeline;
pub use types::{DialogueRecord, RawBlob, StreamKey, Token};
