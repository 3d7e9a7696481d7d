//! Error types for PatLens
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.
//!
//! Only fatal conditions surface here: a missing scan target, an invalid
//! `--exclude` expression, and report serialization failures. Per-file read
//! errors and per-rule compile errors are recoverable and handled in place
//! (the file or rule is skipped and the scan continues).

use thiserror::Error;

/// Main error type for PatLens
#[derive(Error, Debug)]
pub enum PatLensError {
    /// The scan target does not exist on disk
    #[error("Target not found: {path}")]
    TargetNotFound {
        /// Path supplied on the command line
        path: String,
    },

    /// The user-supplied `--exclude` pattern is not a valid regex
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The pattern as typed on the command line
        pattern: String,
        /// The underlying regex compile error
        source: regex::Error,
    },

    /// Failed to serialize the report
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PatLensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_found_message() {
        let err = PatLensError::TargetNotFound {
            path: "/no/such/dir".to_string(),
        };
        assert_eq!(err.to_string(), "Target not found: /no/such/dir");
    }

    #[test]
    fn test_invalid_exclude_message_names_pattern() {
        let source = regex::Regex::new("[").unwrap_err();
        let err = PatLensError::InvalidExcludePattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid exclude pattern '['"));
    }

    #[test]
    fn test_serialization_error_wraps_serde() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = PatLensError::from(source);
        assert!(err.to_string().starts_with("Failed to serialize report"));
    }
}
