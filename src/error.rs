//! Error types for the Fleare client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CliError
pub type Result<T> = std::result::Result<T, CliError>;

/// Unified error type for client operations
#[derive(Debug, Error)]
pub enum CliError {
    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("connection failed: {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Server rejected the `auth` command. Displays the server's message as-is.
    #[error("{0}")]
    Auth(String),

    // -------------------------------------------------------------------------
    // Wire Errors
    // -------------------------------------------------------------------------
    #[error("Framing error: {0}")]
    Framing(String),

    #[error("Decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection is closed")]
    ConnectionClosed,

    // -------------------------------------------------------------------------
    // Local Input Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl CliError {
    /// Errors that abort the process before the interactive loop starts
    pub fn is_fatal_at_startup(&self) -> bool {
        matches!(
            self,
            CliError::Config(_) | CliError::Connect { .. } | CliError::Auth(_)
        )
    }
}
