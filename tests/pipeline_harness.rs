#![allow(unused)]
//! Pipeline integration harness.
//!
//! # What this covers
//!
//! - **Segmentation**: control bytes and `@` split chunks; empty chunks are
//!   dropped; binary suffixes are stripped.
//! - **Pairing**: lookahead past corruption, the skip counter, the name-like
//!   abort, the echo abort, and the single-character filter.
//! - **Decoding**: invalid UTF-8 is dropped and counted, never fatal.
//! - **Snapshots**: the rendered output of a realistic scene is snapshot
//!   tested inline so heuristic drift is caught.
//!
//! # Running
//!
//! ```sh
//! cargo test --test pipeline_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use xivlog_core::pipeline::{decode_lossy, segment, ScanState};
use xivlog_core::{DialogueRecord, Lexicon, Pipeline, RawBlob, Token};

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::as_str).collect()
}

fn tokens(texts: &[&str]) -> Vec<Token> {
    texts.iter().enumerate().map(|(i, t)| Token::new(*t, i)).collect()
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

#[test]
fn basic_blob_segments() {
    let decoded = decode_lossy(BLOB_BASIC);
    assert_eq!(
        texts(&segment(&decoded.text)),
        vec!["Alice", "Hello there friend", "Bob", "casts Fire"]
    );
}

#[test]
fn session_blob_segments() {
    let decoded = decode_lossy(BLOB_SESSION);
    let toks = segment(&decoded.text);
    assert_eq!(toks.len(), 12);
    assert_eq!(toks[0].as_str(), "Character Name One");
    assert_eq!(toks[1].as_str(), "Balmung");
    assert_eq!(toks[2].as_str(), "Good evening, everyone!");
    assert_eq!(toks[6].as_str(), "Zalera.)i)1");
    assert!(toks.iter().enumerate().all(|(i, t)| t.source_index == i));
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

#[test]
fn basic_blob_pairs_only_alice() {
    let lex = Lexicon::builtin();
    let out = Pipeline::new(&lex).extract_bytes(BLOB_BASIC);
    assert_records(&out.records, &[("Alice", "Hello there friend")]);
}

#[test]
fn session_blob_pairs() {
    let lex = Lexicon::builtin();
    let blob = RawBlob::new("FFXIV_CHR01/log/00000001.log", BLOB_SESSION);
    let out = Pipeline::new(&lex).extract(&blob);
    assert_records(&out.records, SESSION_RECORDS);
}

#[test]
fn server_shield_is_skipped_as_message() {
    let lex = Lexicon::builtin();
    let out = Pipeline::new(&lex).extract_bytes(BLOB_SERVER_SHIELD);
    assert_records(&out.records, &[("Alice Smith", "Hello again")]);
}

#[test]
fn system_only_blob_yields_nothing() {
    let lex = Lexicon::builtin();
    let out = Pipeline::new(&lex).extract_bytes(BLOB_SYSTEM_ONLY);
    assert!(out.records.is_empty(), "{:?}", out.records);
    assert_eq!(out.token_count, 4);
}

#[test]
fn echo_does_not_block_later_pairing() {
    let lex = Lexicon::builtin();
    let p = Pipeline::new(&lex);
    let toks = tokens(&["Alice", "Alice", "Hi"]);

    let (state, record) = p.step(&toks, ScanState::default());
    assert_eq!(record, None);
    assert_eq!(state, ScanState { index: 1, skip: 0 });

    assert_records(&p.pair(&toks), &[("Alice", "Hi")]);
}

#[test]
fn consumed_message_is_not_reused_as_actor() {
    let lex = Lexicon::builtin();
    let p = Pipeline::new(&lex);
    // "Meet me at noon" would be a valid actor and pair with "sure thing" if
    // the skip counter did not consume it.
    let toks = tokens(&["Alice", "Meet me at noon", "sure thing"]);
    assert_records(&p.pair(&toks), &[("Alice", "Meet me at noon")]);
}

#[test]
fn manual_exclusions_are_skipped() {
    let lex = Lexicon::builtin();
    let p = Pipeline::new(&lex);
    let toks = tokens(&["Alice", "You use Sprint.", "the autoturret fires", "Ready when you are"]);
    assert_records(&p.pair(&toks), &[("Alice", "Ready when you are")]);
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn invalid_bytes_are_dropped_and_counted() {
    let lex = Lexicon::builtin();
    let out = Pipeline::new(&lex).extract_bytes(BLOB_CORRUPT_BYTES);
    assert_eq!(out.substituted, 3);
    assert_records(&out.records, &[("Alice", "Hi there")]);
}

#[test]
fn arbitrary_bytes_never_panic() {
    let lex = Lexicon::builtin();
    let p = Pipeline::new(&lex);
    let noise: Vec<u8> = (0u16..2048).map(|i| (i.wrapping_mul(7919) % 256) as u8).collect();
    let out = p.extract_bytes(&noise);
    for rec in &out.records {
        assert!(rec.actor.chars().count() >= 4);
        assert!(rec.message.chars().count() > 1);
    }
}

// ---------------------------------------------------------------------------
// Insta snapshots
// ---------------------------------------------------------------------------

#[test]
fn snapshot_session_output() {
    let lex = Lexicon::builtin();
    let out = Pipeline::new(&lex).extract_bytes(BLOB_SESSION);
    let rendered = out
        .records
        .iter()
        .map(DialogueRecord::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    Character Name One: Good evening, everyone!
    Other Player: How was the hunt?
    Character Name One: Quite well, thanks
    ");
}
