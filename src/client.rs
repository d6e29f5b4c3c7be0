//! Protocol Client
//!
//! A thin blocking client: one socket connection, one buffered reader,
//! sequencing a command write followed by a reply decode.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::Result;
use crate::protocol::{read_frame, write_command, Frame};

/// Blocking RESP client over a single TCP connection
///
/// No reconnect or retry logic: a connection failure is reported to the
/// caller as-is, and the client is unusable afterward. Dropping the client
/// closes the underlying connection.
pub struct Client {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to a RESP server
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
        })
    }

    /// Issue one command and block for its reply
    ///
    /// Writes the command frame, then performs exactly one decode. Within a
    /// connection, request/reply pairs are strictly sequential.
    pub fn call<S: AsRef<[u8]>>(&mut self, args: &[S]) -> Result<Frame> {
        write_command(&mut self.writer, args)?;
        self.read_reply()
    }

    /// Decode one reply frame without writing anything
    ///
    /// For callers that issued the write through another path or are waiting
    /// on an unsolicited message.
    pub fn read_reply(&mut self) -> Result<Frame> {
        read_frame(&mut self.reader)
    }
}
