//! Configuration for the Fleare client
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{CliError, Result};

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 9219;

/// History file name, placed under the user's home directory
pub const HISTORY_FILE_NAME: &str = ".fleare_history";

/// Main configuration for a client session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Connection Configuration
    // -------------------------------------------------------------------------
    /// Server host name or address
    pub host: String,

    /// Server TCP port. Held as `u32` so out-of-range input reaches `validate`.
    pub port: u32,

    /// Username sent in the `auth` command
    pub username: String,

    /// Password sent in the `auth` command (may be empty)
    pub password: String,

    // -------------------------------------------------------------------------
    // Terminal Configuration
    // -------------------------------------------------------------------------
    /// Persisted line history. `None` keeps history in memory only.
    pub history_file: Option<PathBuf>,

    /// Emit ANSI styling for the prompt and responses
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: u32::from(DEFAULT_PORT),
            username: String::new(),
            password: String::new(),
            history_file: default_history_file(),
            color: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check connection parameters before any dial is attempted
    pub fn validate(&self) -> Result<()> {
        validate_endpoint(&self.host, self.port).map(|_| ())
    }

    /// `host:port` as dialed
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Validate a host/port pair, returning the port narrowed to `u16`
pub fn validate_endpoint(host: &str, port: u32) -> Result<u16> {
    if host.trim().is_empty() {
        return Err(CliError::Config("host cannot be empty".to_string()));
    }
    match u16::try_from(port) {
        Ok(p) if p != 0 => Ok(p),
        _ => Err(CliError::Config(format!("invalid port number: {}", port))),
    }
}

/// `$HOME/.fleare_history`, if a home directory is known
pub fn default_history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME))
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u32) -> Self {
        self.config.port = port;
        self
    }

    /// Set the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    /// Set the password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the history file location
    pub fn history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.history_file = Some(path.into());
        self
    }

    /// Disable history persistence
    pub fn no_history(mut self) -> Self {
        self.config.history_file = None;
        self
    }

    /// Enable or disable ANSI styling
    pub fn color(mut self, enabled: bool) -> Self {
        self.config.color = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
