//! # minisentinel
//!
//! A minimal RESP (REdis Serialization Protocol) engine paired with a small
//! command server emulating a Redis Sentinel node:
//! - Byte-exact RESP encode/decode over buffered streams
//! - A blocking request/reply client
//! - A topology dispatcher answering `PING` and `SENTINEL MASTERS`
//! - A TCP listener running one worker thread per connection
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Listener                            │
//! │               (one thread per connection)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ read_frame / write_frame
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RESP Codec                               │
//! │          (Frame tree, byte-exact re-encoding)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ command line (Vec<String>)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Sentinel Dispatcher                          │
//! │     (read-only Topology → MasterInfo snapshots)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The monitored master and replicas are external store instances the
//! sentinel knows only by address; it never issues data commands to them.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod client;
pub mod network;
pub mod protocol;
pub mod sentinel;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use client::Client;
pub use config::Config;
pub use error::{Result, SentinelError};
pub use network::{Server, ShutdownHandle};
pub use protocol::Frame;
pub use sentinel::Topology;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of minisentinel
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
