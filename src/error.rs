use thiserror::Error;

/// Startup problems. These abort the process before a game begins.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read vocabulary '{path}': {source}")]
    VocabUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("vocabulary source '{0}' contains no usable words")]
    EmptyVocab(String),

    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Anything that can end a running game early. Rejected words are not
/// errors; they never show up here.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
