//! Error types for taskmaster
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::domain::TaskId;

/// All error types that can occur in taskmaster
#[derive(Debug, Error)]
pub enum TaskError {
    /// Rejected input, e.g. a description that trims to empty
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Task id not present in the collection
    #[error("Task not found: {0}")]
    NotFound(TaskId),

    /// A string could not be parsed into a priority, mode or date
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Storage/persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    /// True for user-level rejections that leave the store untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TaskError::Validation(_) | TaskError::NotFound(_))
    }
}

/// Result type alias for taskmaster operations
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = TaskError::Validation("task description is empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: task description is empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = TaskError::NotFound(42);
        assert_eq!(err.to_string(), "Task not found: 42");
    }

    #[test]
    fn test_invalid_value_error() {
        let err = TaskError::InvalidValue("unknown priority: urgent".to_string());
        assert_eq!(err.to_string(), "Invalid value: unknown priority: urgent");
    }

    #[test]
    fn test_storage_error() {
        let err = TaskError::Storage("slot locked".to_string());
        assert_eq!(err.to_string(), "Storage error: slot locked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: TaskError = io_err.into();
        assert!(matches!(err, TaskError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: TaskError = json_err.into();
        assert!(matches!(err, TaskError::Json(_)));
    }

    #[test]
    fn test_is_recoverable() {
        assert!(TaskError::Validation("empty".to_string()).is_recoverable());
        assert!(TaskError::NotFound(7).is_recoverable());
        assert!(!TaskError::Storage("disk full".to_string()).is_recoverable());
        assert!(!TaskError::InvalidValue("x".to_string()).is_recoverable());
    }
}
