//! File source: reads one chat log as raw bytes.

use std::path::Path;

use xivlog_core::{ExtractError, RawBlob, Result};

/// Read the whole file at `path`. The content is not interpreted.
pub fn read_blob(path: &Path) -> Result<RawBlob> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::trace!(path = %path.display(), bytes = bytes.len(), "source read");
    Ok(RawBlob::new(path, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("00000001.log");
        std::fs::write(&path, b"Alice\x01Hi\xff").unwrap();

        let blob = read_blob(&path).unwrap();
        assert_eq!(blob.bytes, b"Alice\x01Hi\xff");
        assert_eq!(blob.path, path);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_blob(&dir.path().join("gone.log")).unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }));
        assert!(err.to_string().contains("gone.log"));
    }
}
