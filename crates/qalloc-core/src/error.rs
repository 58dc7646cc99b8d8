//! Error types for qalloc

use thiserror::Error;

/// Main error type for qalloc
///
/// Running out of idle resources is not represented here: the allocator reports
/// it as `None` and the driver handles it as a normal outcome.
#[derive(Error, Debug)]
pub enum AllocError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for qalloc operations
pub type Result<T> = std::result::Result<T, AllocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AllocError::InvalidParameter("alpha must be in [0, 1]".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be in [0, 1]");

        let err = AllocError::Config("n_tasks must be greater than 0".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: n_tasks must be greater than 0"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: AllocError = parse_err.into();
        assert!(matches!(err, AllocError::Serialization(_)));
    }
}
