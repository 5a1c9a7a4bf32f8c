//! Pipeline: turns one raw blob into an ordered list of dialogue records.
//!
//! Stages, in order:
//!
//! 1. [`decode_lossy`]: UTF-8 decode, dropping invalid bytes and counting them.
//! 2. [`segment`]: split on control characters and `@`, trim, drop empty
//!    chunks, then [`normalize`] each chunk into a [`Token`].
//! 3. [`Pipeline::step`]: one transition of the pairing scan. Each valid actor
//!    looks ahead up to [`LOOKAHEAD`] tokens for its message; a successful
//!    pair sets a skip count so the consumed tokens are never read as actors.
//!
//! Splitting on `@` separates `Name@Server` compounds, which would otherwise
//! merge an actor with its home world.

use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::{looks_like_name, Classifier};
use crate::lexicon::Lexicon;
use crate::normalizer::normalize;
use crate::types::{DialogueRecord, RawBlob, Token};

/// How many tokens past an actor are searched for its message.
pub const LOOKAHEAD: usize = 3;

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x00-\x1F\x7F-\x9F@]+").expect("delimiter pattern must compile")
});

// ---------------------------------------------------------------------------
// Decoding and segmentation
// ---------------------------------------------------------------------------

/// Output of [`decode_lossy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Number of input bytes that were not valid UTF-8 and were dropped.
    pub substituted: usize,
}

/// Decode `bytes` as UTF-8, dropping every invalid byte. Never fails.
pub fn decode_lossy(bytes: &[u8]) -> Decoded {
    let mut text = String::with_capacity(bytes.len());
    let mut substituted = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        substituted += chunk.invalid().len();
    }
    Decoded { text, substituted }
}

/// Split decoded text into normalised tokens, indexed in source order.
///
/// A chunk that is non-empty after trimming keeps its slot even if
/// normalisation empties it.
pub fn segment(text: &str) -> Vec<Token> {
    DELIMITERS
        .split(text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(normalize)
        .enumerate()
        .map(|(i, text)| Token::new(text, i))
        .collect()
}

// ---------------------------------------------------------------------------
// Scan state
// ---------------------------------------------------------------------------

/// Position of the pairing scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Token currently considered as an actor.
    pub index: usize,
    /// Tokens still to be skipped because a previous pair consumed them.
    pub skip: usize,
}

impl ScanState {
    /// The last token can never be an actor, so the scan stops before it.
    pub fn is_done(&self, tokens: &[Token]) -> bool {
        self.index + 1 >= tokens.len()
    }
}

/// Result of running the whole pipeline on one blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<DialogueRecord>,
    pub token_count: usize,
    pub substituted: usize,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    classifier: Classifier<'a>,
}

impl<'a> Pipeline<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            classifier: Classifier::new(lexicon),
        }
    }

    /// Advance the scan by one token.
    ///
    /// Returns the next state and, if the token at `state.index` was paired
    /// with a message, the record. Pure in `(tokens, state)`.
    pub fn step(&self, tokens: &[Token], state: ScanState) -> (ScanState, Option<DialogueRecord>) {
        let next = ScanState {
            index: state.index + 1,
            skip: state.skip.saturating_sub(1),
        };
        if state.skip > 0 {
            return (next, None);
        }

        let Some(actor) = tokens.get(state.index) else {
            return (next, None);
        };
        if !self.classifier.is_valid_actor(actor.as_str()) {
            return (next, None);
        }

        match self.lookahead(tokens, state.index) {
            Some((offset, message)) => (
                ScanState {
                    index: state.index + 1,
                    skip: offset,
                },
                Some(DialogueRecord::new(actor.text.clone(), message)),
            ),
            None => (next, None),
        }
    }

    /// Find the message for the actor at `index`, returning its offset.
    ///
    /// A name-like candidate or an echo of the actor ends the search for this
    /// actor; later offsets are not tried.
    fn lookahead<'t>(&self, tokens: &'t [Token], index: usize) -> Option<(usize, &'t str)> {
        let actor = tokens[index].as_str();

        for offset in 1..=LOOKAHEAD {
            let Some(candidate) = tokens.get(index + offset) else {
                break;
            };
            let candidate = candidate.as_str();

            if !self.classifier.is_message_candidate(candidate)
                || self.classifier.is_noise(candidate)
            {
                continue;
            }
            if looks_like_name(candidate) {
                tracing::trace!(actor, candidate, "lookahead hit a name, giving up");
                return None;
            }
            if candidate == actor {
                tracing::trace!(actor, "lookahead hit an echo of the actor, giving up");
                return None;
            }
            if candidate.chars().count() > 1 {
                return Some((offset, candidate));
            }
        }
        None
    }

    /// Run the scan over a whole token sequence.
    pub fn pair(&self, tokens: &[Token]) -> Vec<DialogueRecord> {
        let mut state = ScanState::default();
        let mut records = Vec::new();
        while !state.is_done(tokens) {
            let (next, record) = self.step(tokens, state);
            records.extend(record);
            state = next;
        }
        records
    }

    /// Decode, segment and pair raw bytes.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Extraction {
        let decoded = decode_lossy(bytes);
        let tokens = segment(&decoded.text);
        let records = self.pair(&tokens);
        Extraction {
            records,
            token_count: tokens.len(),
            substituted: decoded.substituted,
        }
    }

    pub fn extract(&self, blob: &RawBlob) -> Extraction {
        let out = self.extract_bytes(&blob.bytes);
        tracing::debug!(
            path = %blob.path.display(),
            tokens = out.token_count,
            records = out.records.len(),
            substituted = out.substituted,
            "blob extracted"
        );
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
