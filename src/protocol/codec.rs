//! Protocol codec
//!
//! Encoding and decoding of length-prefixed frames.
//!
//! ## Wire Format
//! ```text
//! ┌──────────────┬─────────────────────────────┐
//! │ Len (4, BE)  │    Payload (Len bytes)      │
//! └──────────────┴─────────────────────────────┘
//! ```
//!
//! A frame is always assembled in one buffer and handed to the writer in a
//! single `write_all`, so a failed send never leaves a half-written length
//! prefix that the caller could try to complete.

use std::io::{ErrorKind, Read, Write};

use bytes::{BufMut, Bytes, BytesMut};
use prost::Message;

use crate::error::{CliError, Result};
use super::{Command, Response};

/// Size of the big-endian length prefix
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Maximum payload size accepted in either direction (64 MB)
pub const MAX_FRAME_SIZE: u32 = 64 * 1024 * 1024;

// =============================================================================
// Generic Frame Encoding/Decoding
// =============================================================================

/// Encode a message into a complete frame
pub fn encode_frame<M: Message>(message: &M) -> Result<Bytes> {
    let payload_len = message.encoded_len();
    if payload_len > MAX_FRAME_SIZE as usize {
        return Err(CliError::Framing(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_FRAME_SIZE
        )));
    }

    let mut frame = BytesMut::with_capacity(LENGTH_PREFIX_SIZE + payload_len);
    frame.put_u32(payload_len as u32);
    message
        .encode(&mut frame)
        .map_err(|e| CliError::Framing(e.to_string()))?;

    Ok(frame.freeze())
}

/// Decode a message from a complete frame held in memory
pub fn decode_frame<M: Message + Default>(bytes: &[u8]) -> Result<M> {
    if bytes.len() < LENGTH_PREFIX_SIZE {
        return Err(CliError::Framing(format!(
            "Incomplete length prefix: expected {} bytes, got {}",
            LENGTH_PREFIX_SIZE,
            bytes.len()
        )));
    }

    let payload_len = parse_length([bytes[0], bytes[1], bytes[2], bytes[3]])?;

    let total_len = LENGTH_PREFIX_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(CliError::Framing(format!(
            "Incomplete payload: expected {} bytes, got {}",
            payload_len,
            bytes.len() - LENGTH_PREFIX_SIZE
        )));
    }

    Ok(M::decode(&bytes[LENGTH_PREFIX_SIZE..total_len])?)
}

/// Validate a length prefix against `MAX_FRAME_SIZE`
fn parse_length(prefix: [u8; LENGTH_PREFIX_SIZE]) -> Result<usize> {
    let payload_len = u32::from_be_bytes(prefix);
    if payload_len > MAX_FRAME_SIZE {
        return Err(CliError::Framing(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_FRAME_SIZE
        )));
    }
    Ok(payload_len as usize)
}

// =============================================================================
// Stream-based I/O
// =============================================================================

/// Read one frame from a stream and decode it
///
/// Blocks until the declared number of payload bytes has arrived. End of
/// stream before the first prefix byte is `ConnectionClosed`; end of stream
/// anywhere later in the frame is a framing error.
pub fn read_frame<R: Read, M: Message + Default>(reader: &mut R) -> Result<M> {
    let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
    match read_full(reader, &mut prefix)? {
        0 => return Err(CliError::ConnectionClosed),
        n if n < LENGTH_PREFIX_SIZE => {
            return Err(CliError::Framing(format!(
                "Incomplete length prefix: expected {} bytes, got {}",
                LENGTH_PREFIX_SIZE, n
            )))
        }
        _ => {}
    }

    let payload_len = parse_length(prefix)?;
    let mut payload = vec![0u8; payload_len];
    let received = read_full(reader, &mut payload)?;
    if received < payload_len {
        return Err(CliError::Framing(format!(
            "Incomplete payload: expected {} bytes, got {}",
            payload_len, received
        )));
    }

    tracing::trace!("Read frame with {} byte payload", payload_len);
    Ok(M::decode(payload.as_slice())?)
}

/// Encode a message and write it as a single frame
pub fn write_frame<W: Write, M: Message>(writer: &mut W, message: &M) -> Result<()> {
    let frame = encode_frame(message)?;
    writer.write_all(&frame)?;
    writer.flush()?;
    tracing::trace!("Wrote frame of {} bytes", frame.len());
    Ok(())
}

/// Fill `buf` until it is full or the stream ends, returning bytes read
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

// =============================================================================
// Command / Response Helpers
// =============================================================================

/// Encode a command frame
pub fn encode_command(command: &Command) -> Result<Bytes> {
    encode_frame(command)
}

/// Decode a command frame
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    decode_frame(bytes)
}

/// Encode a response frame
pub fn encode_response(response: &Response) -> Result<Bytes> {
    encode_frame(response)
}

/// Decode a response frame
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    decode_frame(bytes)
}

/// Read a complete command from a stream
pub fn read_command<R: Read>(reader: &mut R) -> Result<Command> {
    read_frame(reader)
}

/// Write a command to a stream
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    write_frame(writer, command)
}

/// Read a complete response from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<Response> {
    read_frame(reader)
}

/// Write a response to a stream
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    write_frame(writer, response)
}
