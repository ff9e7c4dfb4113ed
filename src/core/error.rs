//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Errors surfaced by the fallible helpers of the crate.
///
/// Log calls themselves never return these: a failed write is counted on the
/// logger and otherwise ignored.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unrecognized level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Level ordinal outside `0..=4`
    #[error("Invalid log level ordinal: {0}")]
    InvalidOrdinal(u8),

    /// Process-wide logger installed twice
    #[error("Global logger already initialized")]
    AlreadyInitialized,
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevel(name.into())
    }
}
