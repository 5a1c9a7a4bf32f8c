//! xivlog-feeds: source adapters for xivlog.
//!
//! [`discovery`] finds the chat logs under a game user directory and
//! [`file`] reads each one as a [`RawBlob`](xivlog_core::RawBlob) for the
//! pipeline. Both are synchronous; files are handed out in a stable order so
//! repeated runs produce identical output.

pub mod discovery;
pub mod file;

pub use discovery::{LogDir, LogDiscovery};
pub use file::read_blob;
