//! Errors raised while loading `stratum.toml` layers.

use std::path::PathBuf;

use super::error_code::{self, StratumErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config layer exists on disk but could not be read.
    #[error("cannot read config layer {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `origin` is a file path, or `<inline>` for configs built from a string.
    #[error("malformed TOML in {origin}: {message}")]
    Malformed { origin: String, message: String },

    #[error("cannot serialize config: {message}")]
    Serialize { message: String },

    #[error("{field} must be greater than 0")]
    ZeroLimit { field: &'static str },

    #[error("{field} must name a directory, got an empty string")]
    EmptyDirectory { field: &'static str },

    #[error("view.layers names unknown layer {layer:?}")]
    UnknownLayer { layer: String },
}

impl StratumErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
