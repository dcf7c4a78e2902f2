//! Response definitions
//!
//! Represents replies from the server.

/// Status token that marks a successful response
pub const STATUS_OK: &str = "Ok";

/// A server reply
#[derive(Clone, PartialEq, prost::Message)]
pub struct Response {
    /// `"Ok"` on success, anything else is an error indicator
    #[prost(string, tag = "1")]
    pub status: String,

    /// Opaque result payload (often UTF-8 text or JSON)
    #[prost(bytes = "vec", tag = "2")]
    pub result: Vec<u8>,

    /// Session identifier, populated only on the auth response
    #[prost(string, tag = "3")]
    pub client_id: String,
}

impl Response {
    /// Create an OK response with a payload
    pub fn ok(result: impl Into<Vec<u8>>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            result: result.into(),
            client_id: String::new(),
        }
    }

    /// Create an error response with the given status token and message
    pub fn error(status: impl Into<String>, message: impl Into<Vec<u8>>) -> Self {
        Self {
            status: status.into(),
            result: message.into(),
            client_id: String::new(),
        }
    }

    /// Attach a session identifier
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Whether the status equals the literal `"Ok"`
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Result payload as text, replacing invalid UTF-8
    pub fn result_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.result)
    }
}
