//! Error types for carousel configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading [`CarouselOptions`](crate::options::CarouselOptions).
///
/// Navigation never fails; configuration is the only fallible surface.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The options file could not be read
    #[error("failed to read options file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The options document is not valid TOML for the options schema
    #[error("invalid carousel options: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
