//! # Fleare CLI
//!
//! Interactive client for the Fleare in-memory database:
//! - Length-prefixed protobuf frames over TCP
//! - Username/password authentication establishing a session id
//! - Line-edited REPL with persisted history
//! - Pretty-printing of structured (JSON) results
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Command Loop                            │
//! │         (line editor, tokenizer, exit / interrupt)           │
//! └──────────────┬──────────────────────────────▲───────────────┘
//!                │ Command                      │ display text
//!                ▼                              │
//! ┌─────────────────────────────┐     ┌─────────┴───────────────┐
//! │         Connection          │     │   Response Formatter    │
//! │   (auth, send, receive)     │────▶│  (status + JSON body)   │
//! └──────────────┬──────────────┘     └─────────────────────────┘
//!                │
//!                ▼
//! ┌─────────────────────────────┐
//! │         Frame Codec         │
//! │  [u32 BE len][protobuf msg] │
//! └─────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod format;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CliError, Result};
pub use config::Config;
pub use network::Connection;
pub use format::Formatter;
pub use repl::CommandLoop;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
