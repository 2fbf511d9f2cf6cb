use thiserror::Error;

/// Errors raised while assembling a [`crate::SlideDeck`].
///
/// These only happen at startup. Once a deck exists every navigation operation is infallible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The slide table has no entries, so there is no valid current index.
    #[error("a deck needs at least one slide")]
    Empty,

    /// Two slides share an id.
    #[error("slide id `{id}` is used more than once")]
    DuplicateId {
        /// The repeated id.
        id: &'static str,
    },
}

/// Errors raised while loading a [`crate::ShellConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid TOML or does not match the expected shape.
    #[error("failed to parse deck config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `log_level` is not one of trace, debug, info, warn or error.
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}
