//! TCP Server
//!
//! Accepts connections and dispatches each to its own worker thread.

use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::network::Connection;
use crate::sentinel::Topology;

/// Poll interval for the shutdown flag while the accept loop is idle
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// TCP listener for the sentinel emulator
///
/// One worker thread per accepted connection, no concurrency bound. The
/// topology is shared read-only across all workers; it is never mutated
/// after the server starts, so no lock is needed.
pub struct Server {
    /// Shared view of the monitored topology
    topology: Arc<Topology>,

    /// Bound listener socket
    listener: TcpListener,

    /// Address actually bound (resolves port 0 to the ephemeral port)
    local_addr: SocketAddr,

    /// Set by a shutdown handle to stop the accept loop
    shutdown: Arc<AtomicBool>,
}

/// Handle for stopping a running server from another thread
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Signal the server to stop accepting and return from `run`
    ///
    /// In-flight connections are not interrupted; their threads finish when
    /// the peer closes.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl Server {
    /// Bind the listen address and build the topology from config
    pub fn bind(config: &Config) -> Result<Self> {
        let topology = Arc::new(Topology::from_config(config)?);
        let listener = TcpListener::bind(&config.listen_addr)?;
        let local_addr = listener.local_addr()?;

        tracing::info!(
            "Sentinel listening on {} (master '{}' at {}, {} replica(s))",
            local_addr,
            topology.master_name(),
            topology.master(),
            topology.replicas().len()
        );

        Ok(Self {
            topology,
            listener,
            local_addr,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Address the server is actually bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Get a handle that can stop this server
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
        }
    }

    /// Run the accept loop (blocking)
    ///
    /// Returns after a shutdown handle fires. Accept runs non-blocking so
    /// the shutdown flag is observed even while no clients are connecting.
    pub fn run(&mut self) -> Result<()> {
        self.listener.set_nonblocking(true)?;

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                tracing::info!("Shutdown requested, stopping accept loop");
                return Ok(());
            }

            match self.listener.accept() {
                Ok((stream, peer)) => {
                    tracing::debug!("Accepted connection from {}", peer);

                    // Workers run blocking I/O; undo the listener's
                    // non-blocking mode on the accepted socket.
                    if let Err(e) = stream.set_nonblocking(false) {
                        tracing::warn!("Failed to configure socket for {}: {}", peer, e);
                        continue;
                    }

                    let topology = Arc::clone(&self.topology);
                    thread::spawn(move || match Connection::new(stream, topology) {
                        Ok(mut connection) => {
                            if let Err(e) = connection.handle() {
                                tracing::debug!(
                                    "Connection {} closed with error: {}",
                                    connection.peer_addr(),
                                    e
                                );
                            }
                        }
                        Err(e) => {
                            tracing::warn!("Failed to set up connection from {}: {}", peer, e);
                        }
                    });
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) => {
                    tracing::warn!("Accept failed: {}", e);
                }
            }
        }
    }
}
