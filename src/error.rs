//! Error types returned at the string and configuration boundaries.

use std::path::PathBuf;

/// A string did not match any of the supported color grammars.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{input}` is not a recognized color")]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// A string did not name one of the supported output formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color format `{0}`")]
pub struct ParseFormatError(pub String);

/// A string did not name one of the supported harmony schemes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown harmony scheme `{0}`")]
pub struct ParseSchemeError(pub String);

/// Errors raised while loading a picker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration was not valid YAML for the expected shape.
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The configured seed color could not be parsed.
    #[error("invalid seed color: {0}")]
    InvalidSeed(#[from] ParseColorError),

    /// History must keep at least one entry.
    #[error("history_capacity must be at least 1")]
    ZeroHistory,

    /// Keyboard steps must be positive and finite.
    #[error("keyboard step `{name}` must be positive, got {value}")]
    InvalidStep {
        /// The offending field.
        name: &'static str,
        /// The configured value.
        value: f64,
    },
}
