//! Network Module
//!
//! TCP listener and per-connection handling.
//!
//! ## Architecture
//! - Single acceptor thread
//! - One worker thread per connection
//! - Commands routed through the sentinel dispatcher

mod connection;
mod server;

pub use connection::Connection;
pub use server::{Server, ShutdownHandle};
