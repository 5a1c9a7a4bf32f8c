//! Assertions for xivlog harnesses.
//!
//! These wrap `pretty_assertions` and add context so a failure says which
//! record or output file diverged.

use std::path::Path;

use pretty_assertions::assert_eq;
use xivlog_core::DialogueRecord;

/// Assert that `records` are exactly `expected`, in order.
pub fn assert_records(records: &[DialogueRecord], expected: &[(&str, &str)]) {
    let actual: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.actor.as_str(), r.message.as_str()))
        .collect();
    assert_eq!(actual, expected, "recovered dialogue differs");
}

/// Assert that the file at `path` holds exactly `lines`, each newline-terminated.
pub fn assert_file_lines(path: &Path, lines: &[&str]) {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read output {}: {e}", path.display()));
    let expected: String = lines.iter().map(|l| format!("{l}\n")).collect();
    assert_eq!(content, expected, "unexpected content in {}", path.display());
}
