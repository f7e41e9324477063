//! Query source error types

use thiserror::Error;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised by a backing store
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The store is unreachable or refused the query
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}

impl SourceError {
    /// Creates an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        SourceError::Unavailable(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = SourceError::unavailable("lock poisoned");
        assert_eq!(
            format!("{}", err),
            "backing store unavailable: lock poisoned"
        );
    }
}
