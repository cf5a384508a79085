//! CSS value parse errors

/// A string could not be parsed as a CSS value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Not a recognized color notation.
    #[error("Invalid color: '{0}'")]
    Color(String),

    /// Not a pixel length or variable reference.
    #[error("Invalid length: '{0}'")]
    Length(String),
}
