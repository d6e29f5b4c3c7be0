//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::sync::Arc;

use crate::error::{Result, SentinelError};
use crate::protocol::{read_frame, write_frame, Frame};
use crate::sentinel::{dispatch, Topology};

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Shared view of the monitored topology
    topology: Arc<Topology>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream, topology: Arc<Topology>) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            topology,
            peer_addr,
        })
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads command frames in a loop, dispatches them against the topology,
    /// and writes replies. Returns when the client disconnects or an error
    /// occurs. A protocol violation closes the connection with no partial
    /// reply: the stream is no longer at a frame boundary.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            // Read next command frame
            let frame = match read_frame(&mut self.reader) {
                Ok(frame) => frame,
                Err(SentinelError::Io(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    // Client disconnected gracefully
                    tracing::debug!("Client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Err(SentinelError::Io(ref e))
                    if e.kind() == std::io::ErrorKind::ConnectionReset =>
                {
                    tracing::debug!("Connection reset by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(SentinelError::Io(ref e))
                    if e.kind() == std::io::ErrorKind::ConnectionAborted =>
                {
                    tracing::debug!("Connection aborted by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(e @ SentinelError::Protocol(_)) => {
                    tracing::warn!("Protocol error from {}: {}", self.peer_addr, e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            };

            tracing::trace!("Received frame from {}: {:?}", self.peer_addr, frame);

            // A request that is not an array of bulk strings is rejected with
            // an error frame, but the stream is still at a frame boundary so
            // the connection survives.
            let reply = match frame.into_strings() {
                Ok(command) => dispatch(&self.topology, &command),
                Err(e) => Frame::error(format!("ERR invalid request: {}", e)),
            };

            // Send reply
            if let Err(e) = write_frame(&mut self.writer, &reply) {
                // If the client disconnected before the reply could be sent,
                // log and exit gracefully rather than treating it as a server
                // error.
                if let SentinelError::Io(ref io_err) = e {
                    match io_err.kind() {
                        std::io::ErrorKind::ConnectionAborted
                        | std::io::ErrorKind::ConnectionReset
                        | std::io::ErrorKind::BrokenPipe => {
                            tracing::debug!(
                                "Client {} disconnected before reply could be sent: {}",
                                self.peer_addr,
                                e
                            );
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                return Err(e);
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
