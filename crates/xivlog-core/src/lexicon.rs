//! Lexicon: the reference vocabulary the classifier tests chunks against.
//!
//! Three sets are kept: server (world) names, noise phrases and combat verbs.
//! All lookups are case-insensitive except [`Lexicon::has_server_prefix`],
//! which matches the capitalised server names as they appear in corrupted
//! `Name@Server` fragments.
//!
//! The built-in tables are compile-time [`phf`] sets. A [`Lexicon`] value is
//! built from them once at startup, optionally extended from the `[lexicon]`
//! config section, and then only ever borrowed.

use std::collections::BTreeSet;
use std::collections::HashSet;

use phf::phf_set;

use crate::config::LexiconConfig;

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

/// World (server) names across the NA, EU, JP and OC data centres.
pub static SERVER_NAMES: phf::Set<&'static str> = phf_set! {
    "Balmung", "Brynhildr", "Coeurl", "Diabolos", "Goblin", "Malboro", "Mateus", "Zalera",
    "Adamantoise", "Cactuar", "Faerie", "Gilgamesh", "Jenova", "Midgardsormr",
    "Sargatanas", "Siren", "Behemoth", "Excalibur", "Hyperion", "Lamia", "Leviathan",
    "Ultros", "Famfrit", "Lich", "Odin", "Phoenix", "Shiva", "Zodiark", "Cerberus",
    "Louisoix", "Moogle", "Ragnarok", "Omega", "Phantom", "Alpha", "Raiden",
    "Sagittarius", "Halicarnassus", "Maduin", "Marilith", "Seraph", "Dynamis", "Aegis",
    "Atomos", "Carbuncle", "Garuda", "Gungnir", "Kujata", "Ramuh", "Tonberry", "Typhon",
    "Unicorn", "Alexander", "Bahamut", "Durandal", "Fenrir", "Ifrit", "Ridill", "Tiamat",
    "Ultima", "Valefor", "Yojimbo", "Zeromus", "Anima", "Asura", "Chocobo", "Hades",
    "Ixion", "Mandragora", "Masamune", "Pandaemonium", "Shinryu", "Titan", "Bismark",
    "Ravana", "Sephirot", "Sophia", "Zurvan",
};

/// Phrases marking a chunk as game output rather than dialogue: combat,
/// system, crafting, plugin and PvP messages, plus skill names that are
/// often mistaken for character names.
pub static NOISE_PHRASES: phf::Set<&'static str> = phf_set! {
    "You gain", "You obtain", "experience points", "Market Board", "Retainer",
    "You synthesize", "Quality changed", "Durability", "Teleport", "queue", "engages",
    "defeated", "standard time", "Server time", "http", "fc", "ls", "Direct hit",
    "Critical hit", "misses", "recovers", "HP", "MP", "TP", "dodge", "parry", "block",
    "resists", "invulnerable", "No target", "location", "instance", "sealed", "commenced",
    "ended", "search", "gathered", "landed", "Bonus", "effect of", "wears off", "damage",
    "mounts the", "You mount", "sanctuary", "ovoo", "PvP area", "soul crystal",
    "traits and hotbars", "Registration Language", "orchestrion", "Invincibility", "Stun",
    "Heavy", "Bind", "Sleep", "Slow", "Silence", "Blind", "Paralysis", "War-chief",
    "Drill Primed", "Welcome to", "Duty pop", "Duty Roulette", "plugin", "Dalamud",
    "Updates:", "Open plugin", "Portrait set", "unaffected", "Lv.", "Level",
    "Bishop Active", "Orogeny", "Paradox", "Biolysis", "Biolytic", "Aquaveil",
    "Stoneskin", "Blast Arrow", "Frontliner", "Cure III", "Sacred Sight", "Protect",
    "Analysis", "Sprint", "Umbral Ice", "Onslaught", "Miracle of Nature", "Diabrosis",
    "Lethargy", "Overheated", "Macrocosmos", "Retrograde", "Resilience", "Shield Smite",
    "Repertoire", "Starfall Dance", "Fan Dance", "Immortal Flames", "Aether Mortar",
    "Honing Dance", "Guard", "Acclaim", "Lady of Crowns", "Honing Ovation",
    "Sacred Claim", "Pandora Lioness", "Chain Stratagem", "Slipping", "Frontline March",
    "Soul Resonance", "Monomachy", "Radiant Aegis", "Further Ruin", "Cuchulainn",
    "Eukrasia", "Epicycle", "Diurnal Benefic", "Astral Warmth", "Crest of Time",
    "Bioblaster", "Mortared", "Expedience", "Desperate Measures", "Fire Resonance",
    "Toxikon", "Haima", "Hysteria", "Thunderclap", "Recuperate", "selling items",
    "Crystarium markets", "equipped", "unequipped",
};

/// Words that, when they open a chunk, mark it as combat data.
pub static COMBAT_VERBS: phf::Set<&'static str> = phf_set! {
    "casts", "uses", "readies", "begins", "hits", "takes", "scores", "misses", "recovers",
    "suffers", "evades", "interrupts", "loses", "gains", "drains", "restores", "reflects",
    "prepares", "defeats", "equipped", "unequipped",
};

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// Immutable membership-test store over the three vocabularies.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Server names in their original case, sorted, for prefix tests.
    servers: Vec<String>,
    servers_lower: HashSet<String>,
    /// Noise phrases, lowercased.
    noise: Vec<String>,
    /// Combat verbs, lowercased.
    verbs: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Build a lexicon from explicit word lists. Nothing from the built-in
    /// tables is included.
    pub fn new<S, N, V>(servers: S, noise: N, verbs: V) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        let servers: BTreeSet<String> = servers
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let servers_lower = servers.iter().map(|s| s.to_lowercase()).collect();

        let noise: BTreeSet<String> = noise
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();

        let verbs = verbs
            .into_iter()
            .map(|v| v.as_ref().trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect();

        Self {
            servers: servers.into_iter().collect(),
            servers_lower,
            noise: noise.into_iter().collect(),
            verbs,
        }
    }

    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self::new(
            SERVER_NAMES.iter(),
            NOISE_PHRASES.iter(),
            COMBAT_VERBS.iter(),
        )
    }

    /// The built-in vocabulary plus the extra entries from `[lexicon]`.
    pub fn from_config(cfg: &LexiconConfig) -> Self {
        fn merged(builtin: &phf::Set<&'static str>, extra: &[String]) -> Vec<String> {
            builtin
                .iter()
                .map(|s| s.to_string())
                .chain(extra.iter().cloned())
                .collect()
        }

        Self::new(
            merged(&SERVER_NAMES, &cfg.extra_server_names),
            merged(&NOISE_PHRASES, &cfg.extra_noise_phrases),
            merged(&COMBAT_VERBS, &cfg.extra_combat_verbs),
        )
    }

    /// Case-insensitive substring test.
    pub fn contains_phrase(text: &str, phrase: &str) -> bool {
        text.to_lowercase().contains(&phrase.to_lowercase())
    }

    /// True if any noise phrase occurs in `text`, ignoring case.
    pub fn contains_noise_phrase(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.noise.iter().any(|p| lowered.contains(p.as_str()))
    }

    /// Case-insensitive exact match against the server names.
    pub fn is_server_name(&self, word: &str) -> bool {
        self.servers_lower.contains(&word.to_lowercase())
    }

    /// Case-insensitive exact match against the combat verbs.
    pub fn is_combat_verb(&self, word: &str) -> bool {
        self.verbs.contains(&word.to_lowercase())
    }

    /// True if `word` starts with a server name. Case-sensitive.
    pub fn has_server_prefix(&self, word: &str) -> bool {
        self.servers.iter().any(|s| word.starts_with(s.as_str()))
    }

    pub fn server_count(&self) -> usize {
        self.servers.len()
    }

    pub fn noise_count(&self) -> usize {
        self.noise.len()
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
