//! Configuration types for xivlog.
//!
//! [`Config::load`] layers an optional TOML file over the embedded defaults.
//! With no explicit path it looks for `~/.config/xivlog/config.toml` and
//! silently skips it when absent. [`Config::defaults`] returns the embedded
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
# input = "/path/to/My Games/FINAL FANTASY XIV - A Realm Reborn"
output = "./Cleaned_Logs"

[discovery]
character_dir_prefix = "FFXIV_CHR"
log_dir_name         = "log"
extension            = "log"

[output]
tracked   = []
catch_all = "World_Context"

[lexicon]
extra_server_names  = []
extra_noise_phrases = []
extra_combat_verbs  = []
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level run configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Root of the game's user directory. Required before a run.
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf { PathBuf::from("./Cleaned_Logs") }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: default_output(),
        }
    }
}

/// `[discovery]` section: which files count as chat logs.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Required prefix of the character directory (parent of `log/`).
    #[serde(default = "default_character_dir_prefix")]
    pub character_dir_prefix: String,
    #[serde(default = "default_log_dir_name")]
    pub log_dir_name: String,
    /// File extension without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_character_dir_prefix() -> String { "FFXIV_CHR".to_string() }
fn default_log_dir_name() -> String { "log".to_string() }
fn default_extension() -> String { "log".to_string() }

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            character_dir_prefix: default_character_dir_prefix(),
            log_dir_name: default_log_dir_name(),
            extension: default_extension(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Character names that get their own output file. Exact spelling.
    #[serde(default)]
    pub tracked: Vec<String>,
    /// File stem of the catch-all stream.
    #[serde(default = "default_catch_all")]
    pub catch_all: String,
}

fn default_catch_all() -> String { "World_Context".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tracked: Vec::new(),
            catch_all: default_catch_all(),
        }
    }
}

/// `[lexicon]` section: entries added on top of the built-in tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub extra_server_names: Vec<String>,
    #[serde(default)]
    pub extra_noise_phrases: Vec<String>,
    #[serde(default)]
    pub extra_combat_verbs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the configuration, layered on top of the built-in defaults.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (config_path(), false),
        };
        tracing::debug!(path = %path.display(), required, "loading config");

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The configured input root, checked to exist.
    pub fn input_root(&self) -> Result<&Path> {
        let input = self.paths.input.as_deref().ok_or(ExtractError::NoInput)?;
        if !input.is_dir() {
            return Err(ExtractError::InputMissing(input.to_path_buf()));
        }
        Ok(input)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("xivlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
