//! Normalizer: strips binary corruption from the edges of a raw chunk.
//!
//! The client frequently appends a fixed-shape artifact to otherwise clean
//! text: a `)` or `.`, then `i`, then up to two characters from
//! `[+=\-:\d\w]`. `"Hello World!)i9"` normalizes to `"Hello World!"`.
//! Punctuation elsewhere in the string is left alone.

use std::sync::LazyLock;

use regex::Regex;

static BINARY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[).]i[+=\-:\d\w]{0,2}$").expect("binary suffix pattern must compile")
});

/// Trim `raw` and strip trailing binary suffixes.
///
/// Stripping repeats until none is left, so stacked artifacts such as
/// `"Yes)i)i9"` come out as `"Yes"` and the function is idempotent.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim();
    while let Some(m) = BINARY_SUFFIX.find(text) {
        text = text[..m.start()].trim_end();
    }
    text.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
