//! Error types for minisentinel
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SentinelError
pub type Result<T> = std::result::Result<T, SentinelError>;

/// Unified error type for minisentinel operations
#[derive(Debug, Error)]
pub enum SentinelError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// A malformed frame on the wire (too-short line, unknown tag, bad
    /// length). Fatal to the connection that saw it: the stream is no longer
    /// positioned at a frame boundary.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// A decomposition helper was applied to a frame of the wrong kind.
    /// Surfaced to that helper's caller; not inherently fatal.
    #[error("Unexpected frame type: expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
