//! Network Module
//!
//! Client side of the TCP connection to a Fleare server.
//!
//! ## Lifecycle
//! - `open`: validate host/port, dial, configure the socket
//! - `authenticate`: one `auth` exchange, sets the session id
//! - `send` / `receive`: one frame each, strictly alternating
//! - `close`: release the socket (safe to repeat)

mod connection;

pub use connection::Connection;
