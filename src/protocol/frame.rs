//! Frame definitions
//!
//! The tagged RESP value: one self-delimiting protocol message.

use bytes::Bytes;

use crate::error::{Result, SentinelError};

/// One RESP frame
///
/// Bulk strings and arrays are nil-able (`None`), matching the `$-1` / `*-1`
/// wire forms. Bulk payloads are raw bytes and may contain anything,
/// including CRLF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// `+<text>\r\n` - line terminated, no embedded CRLF
    Simple(String),

    /// `-<text>\r\n` - same framing as Simple, distinct tag
    Error(String),

    /// `:<decimal>\r\n`
    Integer(i64),

    /// `$<len>\r\n<payload>\r\n`; `$-1\r\n` is nil
    Bulk(Option<Bytes>),

    /// `*<count>\r\n<frame>...`; `*-1\r\n` is nil
    Array(Option<Vec<Frame>>),
}

impl Frame {
    // =========================================================================
    // Builders
    // =========================================================================

    /// Build a simple-string frame
    pub fn simple(text: impl Into<String>) -> Self {
        Frame::Simple(text.into())
    }

    /// Build an error frame
    pub fn error(message: impl Into<String>) -> Self {
        Frame::Error(message.into())
    }

    /// Build an integer frame
    pub fn int(n: i64) -> Self {
        Frame::Integer(n)
    }

    /// Build a bulk-string frame
    pub fn bulk(payload: impl Into<Bytes>) -> Self {
        Frame::Bulk(Some(payload.into()))
    }

    /// The nil bulk string (`$-1\r\n`)
    pub fn null_bulk() -> Self {
        Frame::Bulk(None)
    }

    /// Build an array frame from pre-built child frames
    ///
    /// Children may be of any kind, nested arrays included, so builders
    /// compose freely (an array of arrays of integers, etc.).
    pub fn array(elements: Vec<Frame>) -> Self {
        Frame::Array(Some(elements))
    }

    /// The nil array (`*-1\r\n`)
    pub fn null_array() -> Self {
        Frame::Array(None)
    }

    /// Build an array of bulk strings
    pub fn from_strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Frame::Array(Some(
            items
                .into_iter()
                .map(|s| Frame::bulk(s.into().into_bytes()))
                .collect(),
        ))
    }

    /// Build an array of integers
    pub fn from_ints<I>(items: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Frame::Array(Some(items.into_iter().map(Frame::Integer).collect()))
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Append this frame's exact wire bytes to `buf`
    ///
    /// Lengths are raw byte lengths; decimal formatting is plain, unpadded.
    pub fn encode(&self, buf: &mut Vec<u8>) {
        match self {
            Frame::Simple(text) => {
                buf.push(b'+');
                buf.extend_from_slice(text.as_bytes());
                buf.extend_from_slice(b"\r\n");
            }
            Frame::Error(message) => {
                buf.push(b'-');
                buf.extend_from_slice(message.as_bytes());
                buf.extend_from_slice(b"\r\n");
            }
            Frame::Integer(n) => {
                buf.push(b':');
                buf.extend_from_slice(n.to_string().as_bytes());
                buf.extend_from_slice(b"\r\n");
            }
            Frame::Bulk(Some(payload)) => {
                buf.push(b'$');
                buf.extend_from_slice(payload.len().to_string().as_bytes());
                buf.extend_from_slice(b"\r\n");
                buf.extend_from_slice(payload);
                buf.extend_from_slice(b"\r\n");
            }
            Frame::Bulk(None) => buf.extend_from_slice(b"$-1\r\n"),
            Frame::Array(Some(elements)) => {
                buf.push(b'*');
                buf.extend_from_slice(elements.len().to_string().as_bytes());
                buf.extend_from_slice(b"\r\n");
                for element in elements {
                    element.encode(buf);
                }
            }
            Frame::Array(None) => buf.extend_from_slice(b"*-1\r\n"),
        }
    }

    /// Render the full wire form of this frame
    ///
    /// Byte-exact: re-encoding a decoded frame reproduces the original wire
    /// text, so frames can be forwarded raw.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }

    // =========================================================================
    // Structured Decomposition
    // =========================================================================

    /// Frame kind name, for error reporting
    pub fn kind(&self) -> &'static str {
        match self {
            Frame::Simple(_) => "simple string",
            Frame::Error(_) => "error",
            Frame::Integer(_) => "integer",
            Frame::Bulk(Some(_)) => "bulk string",
            Frame::Bulk(None) => "null bulk string",
            Frame::Array(Some(_)) => "array",
            Frame::Array(None) => "null array",
        }
    }

    /// Decompose an array frame into its ordered child frames
    pub fn into_array(self) -> Result<Vec<Frame>> {
        match self {
            Frame::Array(Some(elements)) => Ok(elements),
            other => Err(SentinelError::UnexpectedType {
                expected: "array",
                found: other.kind(),
            }),
        }
    }

    /// Extract the decoded payload of a bulk-string frame
    pub fn bulk_bytes(self) -> Result<Bytes> {
        match self {
            Frame::Bulk(Some(payload)) => Ok(payload),
            other => Err(SentinelError::UnexpectedType {
                expected: "bulk string",
                found: other.kind(),
            }),
        }
    }

    /// Turn an array-of-bulk-strings frame into its decoded payloads
    ///
    /// This is the shape of a command line once received: name first,
    /// arguments after, order preserved.
    pub fn into_strings(self) -> Result<Vec<String>> {
        self.into_array()?
            .into_iter()
            .map(|frame| {
                let payload = frame.bulk_bytes()?;
                Ok(String::from_utf8_lossy(&payload).into_owned())
            })
            .collect()
    }
}
