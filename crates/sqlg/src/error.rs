//! Error types for sqlg

use thiserror::Error;

/// Result type alias for sqlg operations
pub type SqlgResult<T> = Result<T, SqlgError>;

/// Errors surfaced by the generator.
///
/// Statement generation is total: malformed or partial configuration degrades to an empty
/// [`Statement`](crate::Statement) instead of failing. The only operation with an error channel is
/// [`Generator::select_by_struct`](crate::Generator::select_by_struct).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlgError {
    /// No record was supplied to derive the column list from.
    #[error("target can not be empty")]
    EmptyTarget,
}

impl SqlgError {
    /// Create an empty target error
    pub fn empty_target() -> Self {
        Self::EmptyTarget
    }

    /// Check if this is an empty target error
    pub fn is_empty_target(&self) -> bool {
        matches!(self, Self::EmptyTarget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_target_message() {
        let err = SqlgError::empty_target();
        assert!(err.is_empty_target());
        assert_eq!(err.to_string(), "target can not be empty");
    }
}
