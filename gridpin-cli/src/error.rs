use std::path::PathBuf;

use gridpin::ConfigError;

/// Errors surfaced to the user by the `gridpin` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: ConfigError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn config(path: impl Into<PathBuf>, source: impl Into<ConfigError>) -> Self {
        Self::Config {
            path: path.into(),
            source: source.into(),
        }
    }
}
