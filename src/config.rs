use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use log::info;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::vocab::{EMBEDDED_VOCAB, Vocab};

pub const DEFAULT_SUCCESS_AT_COUNT: usize = 3;

pub const VOCAB_ENV: &str = "WORD_JUMBLE_VOCAB";
pub const SUCCESS_AT_ENV: &str = "WORD_JUMBLE_SUCCESS_AT";
pub const DEBUG_ENV: &str = "WORD_JUMBLE_DEBUG";

/// Immutable startup settings, merged from CLI arguments over environment
/// variables over built-in defaults.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub vocab_path: Option<PathBuf>,
    pub success_at_count: usize,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let vocab_path = match &cli.vocab_path {
            Some(path) => Some(PathBuf::from(path)),
            None => env::var(VOCAB_ENV).ok().map(PathBuf::from),
        };

        let success_at_count = match cli.success_at_count {
            Some(count) => count,
            None => env_setting(SUCCESS_AT_ENV)?.unwrap_or(DEFAULT_SUCCESS_AT_COUNT),
        };
        if success_at_count == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "success-at count",
                value: "0".to_string(),
                reason: "a game that needs zero matches is already over".to_string(),
            });
        }

        Ok(Self {
            vocab_path,
            success_at_count,
            seed: cli.seed,
        })
    }
}

/// Resolve and load the vocabulary: an explicit path wins, then a per-user
/// file under the OS config directory, then the embedded list. An empty
/// result is a startup error, not a silently unwinnable game.
pub fn load_vocab(config: &GameConfig) -> Result<Vocab, ConfigError> {
    let (vocab, source) = match &config.vocab_path {
        Some(path) => (Vocab::from_file(path)?, path.display().to_string()),
        None => match user_vocab_path() {
            Some(path) if path.is_file() => {
                info!("Using vocabulary from {}", path.display());
                let vocab = Vocab::from_file(&path)?;
                (vocab, path.display().to_string())
            }
            _ => (
                Vocab::from_str_list(EMBEDDED_VOCAB),
                "embedded word list".to_string(),
            ),
        },
    };
    if vocab.is_empty() {
        return Err(ConfigError::EmptyVocab(source));
    }
    Ok(vocab)
}

/// Per-user word list location, e.g. `~/.config/word-jumble/vocab.txt`.
pub fn user_vocab_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("word-jumble").join("vocab.txt"))
}

pub fn debug_env_set() -> bool {
    env::var(DEBUG_ENV).is_ok_and(|value| {
        let value = value.trim();
        value == "1" || value.eq_ignore_ascii_case("true")
    })
}

fn env_setting<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => {
            let parsed = raw.trim().parse::<T>();
            match parsed {
                Ok(value) => Ok(Some(value)),
                Err(e) => Err(ConfigError::InvalidSetting {
                    name,
                    value: raw,
                    reason: e.to_string(),
                }),
            }
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(other) => Err(ConfigError::InvalidSetting {
            name,
            value: String::new(),
            reason: other.to_string(),
        }),
    }
}
