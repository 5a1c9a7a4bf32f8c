//! Static chat-log blobs used across harnesses.
//!
//! Each blob mimics what the client writes: text chunks separated by control
//! bytes, `Name@World` compounds, trailing `)i9`-style artifacts, combat and
//! system lines interleaved with dialogue.

/// The worked example: one dialogue pair, then a short actor followed by
/// combat spam.
pub const BLOB_BASIC: &[u8] = b"Alice\x01Hello there friend\x01Bob\x01casts Fire\x01";

/// A short roleplay scene with corruption, combat spam, a name-like
/// interruption and an echoed name.
pub const BLOB_SESSION: &[u8] = b"\x00\x01Character Name One@Balmung\x02\x1fGood evening, everyone!)i9\
\x00Other Player\x03casts Cure\x00Other Player\x01Zalera.)i)1\x02How was the hunt?\
\x00You gain 300 experience points.\x00Character Name One\x01Character Name One\
\x02Quite well, thanks\x00";

/// Records expected from [`BLOB_SESSION`], in order.
pub const SESSION_RECORDS: &[(&str, &str)] = &[
    ("Character Name One", "Good evening, everyone!"),
    ("Other Player", "How was the hunt?"),
    ("Character Name One", "Quite well, thanks"),
];

/// A server name followed by a combat verb must not be read as dialogue.
pub const BLOB_SERVER_SHIELD: &[u8] =
    b"Alice Smith\x01Balmung uses Bad Breath\x01Hello again\x01";

/// Invalid UTF-8 inside a name and a message.
pub const BLOB_CORRUPT_BYTES: &[u8] = b"Ali\xffce\x01Hi th\xfe\xfdere\x01";

/// Nothing but game output.
pub const BLOB_SYSTEM_ONLY: &[u8] = b"You obtain a Potion.\x01Direct hit! Someone takes 1234 damage.\
\x01Teleporting to Limsa Lominsa\x01 12:34 \x01";
