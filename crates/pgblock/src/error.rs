//! Error types for pgblock

use thiserror::Error;

/// Result type alias for pgblock operations
pub type BlockResult<T> = Result<T, BlockError>;

/// Contract violations raised while assembling or rendering blocks.
///
/// Every variant is a programming error on the caller's side; nothing here is
/// transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// An exclusion constraint was built without any elements
    #[error("Exclusion constraint requires at least one element")]
    EmptyExclusion,

    /// The index method is unknown, or cannot back the requested constraint
    #[error("Unsupported index method: {0}")]
    UnsupportedIndexMethod(String),

    /// `append` received something other than a block or a parameter
    #[error("Cannot append {0} to a block; expected a block or a parameter")]
    UnsupportedAppend(&'static str),

    /// A constraint was rendered before the schema layer assigned its name
    #[error("{0} constraint has no name; assign one before rendering")]
    MissingConstraintName(&'static str),

    /// Validation error (identifiers, operators, ...)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BlockError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this error was raised at render time rather than construction time
    pub fn is_render_error(&self) -> bool {
        matches!(self, Self::MissingConstraintName(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
