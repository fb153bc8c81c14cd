//! Simulation error types.

use thiserror::Error;

/// Errors raised while loading catalogs or writing session logs.
#[derive(Debug, Error)]
pub enum SimError {
    /// The recall core rejected an operation.
    #[error(transparent)]
    Recall(#[from] recall_core::RecallError),

    /// A catalog document could not be parsed.
    #[error("Invalid catalog: {0}")]
    Catalog(String),

    /// A session log row could not be written or read back.
    #[error("Session log error: {0}")]
    Csv(#[from] csv::Error),

    /// A session log row had an unexpected shape.
    #[error("Malformed session record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line in the log file.
        line: u64,
        /// What was wrong with it.
        reason: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, SimError>;
