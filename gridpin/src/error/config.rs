//! Configuration errors

use super::{LayoutError, ValueError};

/// Errors raised while turning theme, palette or table files into values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A theme field holds an unparseable value.
    #[error("Invalid theme field '{field}': {source}")]
    Theme {
        /// Name of the theme field.
        field: &'static str,
        /// Underlying parse error.
        source: ValueError,
    },

    /// A palette entry holds an unparseable color.
    #[error("Invalid palette entry '{name}': {source}")]
    Palette {
        /// Variable name of the entry.
        name: String,
        /// Underlying parse error.
        source: ValueError,
    },

    /// The column list does not form a valid layout.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The document is not valid JSON for the expected shape.
    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
