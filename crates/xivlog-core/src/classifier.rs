//! Classifier: decides what a normalised chunk is.
//!
//! Every predicate is total over `&str` and borrows a [`Lexicon`]. The checks
//! in [`Classifier::is_valid_actor`] run cheapest first, but their order does
//! not change the result.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;

/// Code points that only show up in corrupted binary output.
const ARTIFACT_CHARS: &[char] = &[
    '\u{E06F}', '\u{065C}', '\u{069C}', '\u{071C}', '\u{075C}', '\u{079C}', '\u{06DC}', '$',
];

/// Binary artifacts often start with one of these.
const BAD_LEADING: &[char] = &['.', '[', ')', '!'];

/// Known message false positives, matched case-sensitively.
const MANUAL_EXCLUSIONS: &[&str] = &["You use", "You cast", "autoturret"];

/// Minimum actor length in characters. Character names have two parts.
const MIN_ACTOR_LEN: usize = 4;

/// A capitalised phrase shorter than this looks like another name.
const NAME_LIKE_MAX_LEN: usize = 20;

static NO_LETTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d\s\W]+$").expect("no-letters pattern must compile")
});

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("digits pattern must compile"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("non-word pattern must compile"));

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Classifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Game output rather than dialogue: contains a noise phrase, contains an
    /// artifact code point, or has no alphabetic content at all.
    pub fn is_noise(&self, text: &str) -> bool {
        self.lexicon.contains_noise_phrase(text)
            || text.contains(ARTIFACT_CHARS)
            || NO_LETTERS.is_match(text)
    }

    /// Combat data shaped like a sentence.
    ///
    /// Empty text counts as spam. Otherwise the first space-separated word
    /// (colons removed) decides: a combat verb or a number is spam. A server
    /// name followed by a combat verb (`"Balmung uses ..."`) is spam too.
    pub fn is_combat_spam(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return true;
        }

        let mut parts = text.split(' ');
        let first = parts
            .next()
            .unwrap_or_default()
            .replace(':', "")
            .trim()
            .to_lowercase();

        if self.lexicon.is_combat_verb(&first) || is_numeric(&first) {
            return true;
        }

        if self.lexicon.is_server_name(&first) {
            if let Some(second) = parts.next() {
                return self.lexicon.is_combat_verb(second);
            }
        }

        false
    }

    /// A corrupted server string such as `"Zalera.)i)1"` or `"Coeurl.on"`:
    /// once non-word characters are removed, it starts with a server name.
    pub fn is_server_junk(&self, text: &str) -> bool {
        let word = NON_WORD.replace_all(text, "");
        self.lexicon.has_server_prefix(&word)
    }

    /// Plausible character name.
    pub fn is_valid_actor(&self, text: &str) -> bool {
        if text.chars().count() < MIN_ACTOR_LEN {
            return false;
        }
        if text.starts_with(BAD_LEADING) || text.contains("::") {
            return false;
        }
        !(self.is_noise(text) || self.is_combat_spam(text) || self.is_server_junk(text))
    }

    /// Survives the hard rejections applied to every lookahead candidate.
    /// Noise is checked separately by the pipeline.
    pub fn is_message_candidate(&self, text: &str) -> bool {
        if self.is_server_junk(text) || text.starts_with(BAD_LEADING) {
            return false;
        }
        if self.is_combat_spam(text) {
            return false;
        }
        !MANUAL_EXCLUSIONS.iter().any(|p| text.contains(p))
    }
}

/// Short, multi-word and capitalised like `"Firstname Lastname"`: more
/// likely the next speaker's name than a line of dialogue.
///
/// Every word must start uppercase, so a short sentence such as
/// `"Hello there friend"` is still accepted as a message.
pub fn looks_like_name(text: &str) -> bool {
    text.chars().count() < NAME_LIKE_MAX_LEN
        && text.contains(' ')
        && text
            .split(' ')
            .filter(|w| !w.is_empty())
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
}

/// Decimal digits only (Unicode `Nd`). Fractions and numerals such as `½`
/// or `Ⅻ` are not numbers here.
fn is_numeric(word: &str) -> bool {
    DIGITS.is_match(word)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
