//! Query construction and execution error types

use thiserror::Error;

use crate::columns::ColumnError;
use crate::source::SourceError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised while building or executing a grid query
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// Sort column index is not in the registry
    #[error("unknown column index: {0}")]
    UnknownColumn(i64),

    /// Sort column exists but is not flagged sortable
    #[error("column '{0}' is not sortable")]
    UnsortableColumn(&'static str),

    /// The backing store failed or was unreachable
    #[error(transparent)]
    Store(#[from] SourceError),
}

impl QueryError {
    /// Returns true if the error is a caller mistake rather than a store
    /// failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QueryError::UnknownColumn(_) | QueryError::UnsortableColumn(_)
        )
    }
}

impl From<ColumnError> for QueryError {
    fn from(e: ColumnError) -> Self {
        match e {
            ColumnError::Unknown(index) => QueryError::UnknownColumn(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_error_becomes_validation() {
        let err = QueryError::from(ColumnError::Unknown(99));
        assert!(err.is_validation());
        assert_eq!(format!("{}", err), "unknown column index: 99");
    }

    #[test]
    fn test_store_error_not_validation() {
        let err = QueryError::from(SourceError::unavailable("connection refused"));
        assert!(!err.is_validation());
    }
}
