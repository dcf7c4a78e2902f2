//! Protocol Module
//!
//! Defines the wire protocol spoken between the client and a Fleare server.
//!
//! ## Frame Format
//! ```text
//! ┌──────────────┬──────────────────────────────────┐
//! │ Len (4, BE)  │     protobuf-encoded message     │
//! └──────────────┴──────────────────────────────────┘
//! ```
//!
//! ### Messages
//! - `Command  { command = 1, args = 2 }` (client to server)
//! - `Response { status = 1, result = 2, client_id = 3 }` (server to client)
//!
//! Client and server alternate strictly: one Command frame, then one
//! Response frame.

mod command;
mod response;
mod codec;

pub use command::Command;
pub use response::{Response, STATUS_OK};
pub use codec::{
    encode_frame, decode_frame, read_frame, write_frame,
    encode_command, decode_command, encode_response, decode_response,
    read_command, write_command, read_response, write_response,
    LENGTH_PREFIX_SIZE, MAX_FRAME_SIZE,
};
