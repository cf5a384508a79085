//! Column layout errors

/// Errors raised while building or editing a pinned column layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Two column definitions share an id.
    #[error("Duplicate column id '{id}'")]
    DuplicateColumn {
        /// The repeated id.
        id: String,
    },

    /// No column with this id exists.
    #[error("Column '{id}' not found")]
    UnknownColumn {
        /// The id that was looked up.
        id: String,
    },
}

impl LayoutError {
    /// Creates a duplicate column error.
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateColumn { id: id.into() }
    }

    /// Creates an unknown column error.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownColumn { id: id.into() }
    }
}
