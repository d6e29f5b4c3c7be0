//! Command dispatcher
//!
//! Maps one inbound command line to one reply frame. Read-only with respect
//! to the topology: no command mutates master/replica membership.

use crate::protocol::Frame;
use crate::sentinel::Topology;

/// Dispatch one command against the topology
///
/// Two commands are modeled: `PING` and `SENTINEL MASTERS`. Anything else is
/// answered with a well-formed RESP error frame; the connection stays open.
pub fn dispatch(topology: &Topology, command: &[String]) -> Frame {
    let Some(name) = command.first() else {
        return Frame::error("ERR empty command");
    };

    match name.to_ascii_uppercase().as_str() {
        "PING" => Frame::simple("PONG"),
        "SENTINEL" => dispatch_sentinel(topology, &command[1..]),
        _ => {
            tracing::debug!("Unknown command: {}", name);
            Frame::error(format!("ERR unknown command '{}'", name))
        }
    }
}

/// Dispatch a `SENTINEL <subcommand>` request
fn dispatch_sentinel(topology: &Topology, args: &[String]) -> Frame {
    match args.first().map(|s| s.to_ascii_uppercase()).as_deref() {
        Some("MASTERS") => masters_reply(topology),
        Some(sub) => Frame::error(format!("ERR unknown SENTINEL subcommand '{}'", sub)),
        None => Frame::error("ERR wrong number of arguments for 'sentinel' command"),
    }
}

/// Build the `SENTINEL MASTERS` reply
///
/// An array of master-info records, here always exactly one: the outer
/// one-element array wraps the alternating field/value bulk-string array.
fn masters_reply(topology: &Topology) -> Frame {
    let info = topology.master_info();
    Frame::array(vec![Frame::from_strings(info.flatten())])
}
