//! Errors of the code around the scanner
//!
//! The scanner reports "does not apply" by returning `false` and never errors. Loading
//! configuration, reading sources and writing token dumps can fail; those failures are
//! collected here.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown source format `{0}`, expected `fixed` or `free`")]
    InvalidFormatMode(String),

    #[error("unknown output format `{0}`, expected `text`, `json` or `yaml`")]
    InvalidOutputFormat(String),

    #[error("missing argument `{0}`")]
    MissingArgument(&'static str),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
