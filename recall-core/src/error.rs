//! Error types for the recall core library.

use thiserror::Error;

/// Top-level error type for all recall operations.
///
/// A query that finds nothing is not an error: [`crate::DeclarativeStore::retrieve`]
/// returns `Ok(None)` for that.
#[derive(Error, Debug)]
pub enum RecallError {
    /// Context cues and their weights were not paired one-to-one.
    #[error("Mismatched cue/weight lengths: {cues} cues, {weights} weights")]
    MismatchedCues {
        /// Number of context cues supplied.
        cues: usize,
        /// Number of weights supplied.
        weights: usize,
    },

    /// Retrieval latency was requested before any activation was computed.
    #[error("Activation not yet computed for concept '{concept}'")]
    ActivationNotComputed {
        /// Label of the offending item.
        concept: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, RecallError>;
