//! Sentinel Module
//!
//! The monitored topology, the per-query master-info snapshot, and the
//! command dispatcher that maps inbound RESP commands to replies.

mod dispatcher;
mod topology;

pub use dispatcher::dispatch;
pub use topology::{Endpoint, MasterInfo, Topology};
