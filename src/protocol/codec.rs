//! Protocol codec
//!
//! Streaming decode and encode for RESP frames.
//!
//! ## Wire Format
//!
//! ```text
//! Simple string:  +<text>\r\n
//! Error:          -<text>\r\n
//! Integer:        :<decimal>\r\n
//! Bulk string:    $<byte-length>\r\n<payload>\r\n    ($-1\r\n is nil)
//! Array:          *<count>\r\n<frame>...             (*-1\r\n is nil)
//! ```
//!
//! Every frame is self-delimiting: a reader never needs lookahead beyond the
//! frame's own length prefix and terminator. Command requests are always an
//! array of bulk strings, e.g. `PING` encodes as `*1\r\n$4\r\nPING\r\n`.
//!
//! Maps, sets, doubles, booleans, verbatim strings, and push messages are
//! deliberately not covered.

use std::io::{BufRead, Write};

use bytes::Bytes;

use crate::error::{Result, SentinelError};
use crate::protocol::Frame;

/// Minimum valid frame line: tag byte + CRLF
const MIN_LINE_LEN: usize = 3;

/// Maximum bulk-string payload (16 MB)
pub const MAX_BULK_SIZE: i64 = 16 * 1024 * 1024;

/// Maximum array element count
pub const MAX_ARRAY_LEN: i64 = 1024 * 1024;

// =============================================================================
// Decoding
// =============================================================================

/// Decode one frame from a buffered byte stream
///
/// The reader must be positioned at a frame boundary. Exactly one frame's
/// worth of bytes is consumed, never more: the byte after the frame's
/// terminator is left untouched for the next call.
///
/// Malformed input (short line, unknown tag, bad length) fails with
/// [`SentinelError::Protocol`]; stream failures propagate unchanged as
/// [`SentinelError::Io`].
pub fn read_frame<R: BufRead>(reader: &mut R) -> Result<Frame> {
    let line = read_line(reader)?;

    // Payload between the tag byte and the CRLF
    let body = &line[1..line.len() - 2];

    match line[0] {
        b'+' => Ok(Frame::Simple(String::from_utf8_lossy(body).into_owned())),
        b'-' => Ok(Frame::Error(String::from_utf8_lossy(body).into_owned())),
        b':' => Ok(Frame::Integer(parse_int(body)?)),
        b'$' => read_bulk(reader, parse_int(body)?),
        b'*' => read_array(reader, parse_int(body)?),
        tag => Err(SentinelError::Protocol(format!(
            "unknown frame tag: 0x{:02x}",
            tag
        ))),
    }
}

/// Read one CRLF-terminated line, terminator included
///
/// A clean close at a frame boundary (zero bytes read) surfaces as
/// `UnexpectedEof`, distinct from a malformed partial line.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;

    if line.is_empty() {
        return Err(SentinelError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "connection closed",
        )));
    }
    if line.len() < MIN_LINE_LEN {
        return Err(SentinelError::Protocol(format!(
            "frame line too short: {} bytes",
            line.len()
        )));
    }
    if &line[line.len() - 2..] != b"\r\n" {
        return Err(SentinelError::Protocol(
            "frame line missing CRLF terminator".to_string(),
        ));
    }

    Ok(line)
}

/// Parse a decimal integer from a line body
fn parse_int(body: &[u8]) -> Result<i64> {
    std::str::from_utf8(body)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            SentinelError::Protocol(format!(
                "invalid integer: {:?}",
                String::from_utf8_lossy(body)
            ))
        })
}

/// Read a bulk-string payload after its `$<len>` header line
///
/// A negative length is the nil bulk string; nothing further is consumed.
fn read_bulk<R: BufRead>(reader: &mut R, len: i64) -> Result<Frame> {
    if len < 0 {
        return Ok(Frame::Bulk(None));
    }
    if len > MAX_BULK_SIZE {
        return Err(SentinelError::Protocol(format!(
            "bulk string too large: {} bytes (max {})",
            len, MAX_BULK_SIZE
        )));
    }

    // Exactly len payload bytes plus the trailing CRLF. read_exact loops
    // internally: a single underlying read is not guaranteed to fill the
    // buffer.
    let mut buf = vec![0u8; len as usize + 2];
    reader.read_exact(&mut buf)?;

    if &buf[buf.len() - 2..] != b"\r\n" {
        return Err(SentinelError::Protocol(
            "bulk string payload missing CRLF terminator".to_string(),
        ));
    }

    buf.truncate(len as usize);
    Ok(Frame::Bulk(Some(Bytes::from(buf))))
}

/// Read `count` child frames after a `*<count>` header line
///
/// A negative count is the nil array; nothing further is consumed.
fn read_array<R: BufRead>(reader: &mut R, count: i64) -> Result<Frame> {
    if count < 0 {
        return Ok(Frame::Array(None));
    }
    if count > MAX_ARRAY_LEN {
        return Err(SentinelError::Protocol(format!(
            "array too large: {} elements (max {})",
            count, MAX_ARRAY_LEN
        )));
    }

    let mut elements = Vec::with_capacity(count as usize);
    for _ in 0..count {
        elements.push(read_frame(reader)?);
    }

    Ok(Frame::Array(Some(elements)))
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a command (name plus arguments) to its request wire form
///
/// Always an array of bulk strings; argument bytes pass through untouched.
pub fn encode_command<S: AsRef<[u8]>>(args: &[S]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(b'*');
    buf.extend_from_slice(args.len().to_string().as_bytes());
    buf.extend_from_slice(b"\r\n");

    for arg in args {
        let arg = arg.as_ref();
        buf.push(b'$');
        buf.extend_from_slice(arg.len().to_string().as_bytes());
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(arg);
        buf.extend_from_slice(b"\r\n");
    }

    buf
}

/// Write a command to a stream
pub fn write_command<W: Write, S: AsRef<[u8]>>(writer: &mut W, args: &[S]) -> Result<()> {
    writer.write_all(&encode_command(args))?;
    writer.flush()?;
    Ok(())
}

/// Write one reply frame to a stream
pub fn write_frame<W: Write>(writer: &mut W, frame: &Frame) -> Result<()> {
    writer.write_all(&frame.to_bytes())?;
    writer.flush()?;
    Ok(())
}
