//! Command definitions
//!
//! Represents requests sent to the server.

/// Name of the command used for the authentication handshake
pub const AUTH_COMMAND: &str = "auth";

/// A client request: an operation name and its string arguments
#[derive(Clone, PartialEq, prost::Message)]
pub struct Command {
    /// Operation name (first token of the input line)
    #[prost(string, tag = "1")]
    pub command: String,

    /// Remaining tokens, in order
    #[prost(string, repeated, tag = "2")]
    pub args: Vec<String>,
}

impl Command {
    /// Create a command from a name and arguments
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The authentication command. The password may be empty.
    pub fn auth(username: &str, password: &str) -> Self {
        Self::new(AUTH_COMMAND, [username, password])
    }

    /// Build a command from tokens; the first token is the name.
    ///
    /// Returns `None` for an empty token list.
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        let mut tokens = tokens.into_iter();
        let command = tokens.next()?;
        Some(Self {
            command,
            args: tokens.collect(),
        })
    }

    /// Operation name
    pub fn name(&self) -> &str {
        &self.command
    }
}
