//! Column registry error types

use thiserror::Error;

/// Errors raised during column resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// The protocol sent an index the registry does not map
    #[error("unknown column index: {0}")]
    Unknown(i64),
}

/// Result type for column operations
pub type ColumnResult<T> = Result<T, ColumnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_display() {
        let err = ColumnError::Unknown(99);
        assert_eq!(format!("{}", err), "unknown column index: 99");
    }
}
