//! Client Connection
//!
//! Owns the socket to the server and the session established on it.

use std::io::{BufReader, BufWriter};
use std::net::{Shutdown, TcpStream};

use crate::config::{validate_endpoint, Config};
use crate::error::{CliError, Result};
use crate::protocol::{read_response, write_command, Command, Response};

/// Buffered halves of the socket
struct Transport {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,
}

/// A connection to a Fleare server
///
/// Exchanges are strictly request/response: every `send` must be followed by
/// exactly one `receive` before the next `send`. After an I/O or framing
/// failure the socket is abandoned, and every later exchange fails with
/// `ConnectionClosed` until the process exits.
pub struct Connection {
    /// `None` once closed
    transport: Option<Transport>,

    /// Peer address for the prompt and logging
    peer_addr: String,

    /// Set exactly once, from a successful auth response
    session_id: String,

    /// Result text of the auth response
    greeting: String,
}

impl Connection {
    /// Open a connection to `host:port`
    ///
    /// Host and port are validated before dialing. A dial failure is
    /// returned as `CliError::Connect` and is never retried.
    pub fn open(host: &str, port: u32) -> Result<Self> {
        let port = validate_endpoint(host, port)?;
        let addr = format!("{}:{}", host, port);

        tracing::debug!("Connecting to {}", addr);
        let stream = TcpStream::connect((host, port)).map_err(|source| {
            tracing::debug!("Failed to connect to {}: {}", addr, source);
            CliError::Connect { addr, source }
        })?;

        Self::from_stream(stream)
    }

    /// Wrap an already connected stream
    ///
    /// Sets up buffered I/O and disables Nagle's algorithm.
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            transport: Some(Transport {
                reader: BufReader::new(read_stream),
                writer: BufWriter::new(write_stream),
            }),
            peer_addr,
            session_id: String::new(),
            greeting: String::new(),
        })
    }

    /// Open and authenticate using the connection parameters in `config`
    pub fn connect(config: &Config) -> Result<Self> {
        let mut conn = Self::open(&config.host, config.port)?;
        conn.authenticate(&config.username, &config.password)?;
        Ok(conn)
    }

    /// Run the authentication handshake, returning the session id
    ///
    /// On any failure the connection is closed before the error is returned.
    /// A rejected login yields `CliError::Auth` carrying the server's message,
    /// or a generic message when the server sent none.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<&str> {
        if self.is_authenticated() {
            return Err(CliError::Auth("session is already authenticated".to_string()));
        }

        let response = match self.exchange(&Command::auth(username, password)) {
            Ok(response) => response,
            Err(e) => {
                self.close();
                return Err(e);
            }
        };

        if !response.is_ok() {
            self.close();
            let message = if response.result.is_empty() {
                "authentication failed".to_string()
            } else {
                response.result_text().into_owned()
            };
            tracing::debug!("Authentication rejected with status {}", response.status);
            return Err(CliError::Auth(message));
        }

        if response.client_id.is_empty() {
            self.close();
            return Err(CliError::Auth(
                "authentication failed: server returned no session id".to_string(),
            ));
        }

        self.greeting = response.result_text().into_owned();
        self.session_id = response.client_id;
        tracing::debug!("Authenticated with {} as session {}", self.peer_addr, self.session_id);

        Ok(&self.session_id)
    }

    /// Send one command frame
    pub fn send(&mut self, command: &Command) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(CliError::ConnectionClosed)?;

        tracing::debug!("Sending command {:?} with {} args", command.name(), command.args.len());
        if let Err(e) = write_command(&mut transport.writer, command) {
            // Delivery is unknown after a failed write; the stream is unusable.
            tracing::warn!("Send to {} failed: {}", self.peer_addr, e);
            self.close();
            return Err(e);
        }
        Ok(())
    }

    /// Receive one response frame
    pub fn receive(&mut self) -> Result<Response> {
        let transport = self.transport.as_mut().ok_or(CliError::ConnectionClosed)?;

        match read_response(&mut transport.reader) {
            Ok(response) => {
                tracing::trace!("Received response with status {}", response.status);
                Ok(response)
            }
            // A whole frame was consumed, so the stream is still in sync.
            Err(e @ CliError::Decode(_)) => Err(e),
            Err(e) => {
                tracing::warn!("Receive from {} failed: {}", self.peer_addr, e);
                self.close();
                Err(e)
            }
        }
    }

    /// Send a command and read its response
    pub fn exchange(&mut self, command: &Command) -> Result<Response> {
        self.send(command)?;
        self.receive()
    }

    /// Release the socket. Calling this more than once is harmless.
    pub fn close(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            use std::io::Write;
            let _ = transport.writer.flush();
            let _ = transport.writer.get_ref().shutdown(Shutdown::Both);
            tracing::debug!("Connection to {} closed", self.peer_addr);
        }
    }

    /// Whether the socket has been released
    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    /// Whether a session id has been set
    pub fn is_authenticated(&self) -> bool {
        !self.session_id.is_empty()
    }

    /// Session id from the auth response (empty before authentication)
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Result text the server returned with a successful auth response
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
