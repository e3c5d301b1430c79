//! Error types and exit codes for movierank
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/config values)
//! - 3: Data error (missing input file, no valid movies)
//!
//! Per-line parse failures are not errors: they are collected as
//! [`crate::movie::ParseFailure`] values and reported alongside the result.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the movierank binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing input, nothing to rank (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during a movierank run
#[derive(Error, Debug)]
pub enum MovieError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("no valid movies found ({failures} invalid line(s) skipped)")]
    NoValidRecords { failures: usize },

    #[error("cannot compute statistics over an empty collection")]
    EmptyCollection,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),

    #[error("analysis interrupted")]
    Interrupted,
}

impl MovieError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MovieError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MovieError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MovieError::UnknownFormat(_)
            | MovieError::UsageError(_)
            | MovieError::InvalidValue { .. } => ExitCode::Usage,

            MovieError::FileNotFound { .. }
            | MovieError::NotAFile { .. }
            | MovieError::NoValidRecords { .. }
            | MovieError::EmptyCollection => ExitCode::Data,

            MovieError::Io(_)
            | MovieError::Json(_)
            | MovieError::Toml(_)
            | MovieError::FailedOperationWithTarget { .. }
            | MovieError::Other(_)
            | MovieError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            MovieError::UnknownFormat(_) => "unknown_format",
            MovieError::UsageError(_) => "usage_error",
            MovieError::InvalidValue { .. } => "invalid_value",
            MovieError::FileNotFound { .. } => "file_not_found",
            MovieError::NotAFile { .. } => "not_a_file",
            MovieError::NoValidRecords { .. } => "no_valid_records",
            MovieError::EmptyCollection => "empty_collection",
            MovieError::Io(_) => "io_error",
            MovieError::Json(_) => "json_error",
            MovieError::Toml(_) => "toml_error",
            MovieError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            MovieError::Other(_) => "other",
            MovieError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for movierank operations
pub type Result<T> = std::result::Result<T, MovieError>;
