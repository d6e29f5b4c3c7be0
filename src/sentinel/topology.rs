//! Monitored topology
//!
//! One master and an ordered replica set, fixed at construction. The
//! sentinel only knows these instances by network address; it never issues
//! data commands to them.

use std::fmt;

use rand::Rng;

use crate::config::Config;
use crate::error::{Result, SentinelError};

/// A reachable network endpoint of an external store instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Parse a "host:port" string
    pub fn parse(addr: &str) -> Result<Self> {
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| SentinelError::Config(format!("invalid endpoint: {}", addr)))?;

        let port = port
            .parse::<u16>()
            .map_err(|_| SentinelError::Config(format!("invalid port in endpoint: {}", addr)))?;

        if host.is_empty() {
            return Err(SentinelError::Config(format!("invalid endpoint: {}", addr)));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// The monitored deployment: one master, zero or more replicas
///
/// Built once from [`Config`] and never mutated at runtime; every connection
/// thread reads it concurrently through a shared `Arc` with no lock. Live
/// failover election is not modeled.
#[derive(Debug, Clone)]
pub struct Topology {
    master_name: String,
    master: Endpoint,
    replicas: Vec<Endpoint>,
    quorum: u32,
    down_after_ms: u64,
    failover_timeout_ms: u64,
    parallel_syncs: u32,
}

impl Topology {
    /// Build the topology from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let master = Endpoint::parse(&config.master_addr)?;
        let replicas = config
            .replica_addrs
            .iter()
            .map(|addr| Endpoint::parse(addr))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            master_name: config.master_name.clone(),
            master,
            replicas,
            quorum: config.quorum,
            down_after_ms: config.down_after_ms,
            failover_timeout_ms: config.failover_timeout_ms,
            parallel_syncs: config.parallel_syncs,
        })
    }

    /// Name of the monitored master
    pub fn master_name(&self) -> &str {
        &self.master_name
    }

    /// Endpoint of the monitored master
    pub fn master(&self) -> &Endpoint {
        &self.master
    }

    /// Ordered replica endpoints, as configured at startup
    pub fn replicas(&self) -> &[Endpoint] {
        &self.replicas
    }

    /// Build a point-in-time master-info snapshot
    ///
    /// Rebuilt per query, never incrementally mutated. The run id is freshly
    /// generated each time, so it is not stable across queries or restarts.
    pub fn master_info(&self) -> MasterInfo {
        MasterInfo {
            name: self.master_name.clone(),
            ip: self.master.host.clone(),
            port: self.master.port,
            run_id: generate_run_id(),
            flags: "master",
            link_pending_commands: 0,
            link_refcount: 1,
            last_ping_sent: 0,
            last_ok_ping_reply: 0,
            last_ping_reply: 0,
            down_after_ms: self.down_after_ms,
            num_slaves: self.replicas.len(),
            num_other_sentinels: 0,
            quorum: self.quorum,
            failover_timeout_ms: self.failover_timeout_ms,
            parallel_syncs: self.parallel_syncs,
        }
    }
}

/// Snapshot describing the monitored master
///
/// Immutable after construction. Liveness and timing counters are fixed
/// constants: this emulator does not track real heartbeat timestamps.
#[derive(Debug, Clone)]
pub struct MasterInfo {
    pub name: String,
    pub ip: String,
    pub port: u16,
    pub run_id: String,
    pub flags: &'static str,
    pub link_pending_commands: u64,
    pub link_refcount: u64,
    pub last_ping_sent: u64,
    pub last_ok_ping_reply: u64,
    pub last_ping_reply: u64,
    pub down_after_ms: u64,
    pub num_slaves: usize,
    pub num_other_sentinels: u32,
    pub quorum: u32,
    pub failover_timeout_ms: u64,
    pub parallel_syncs: u32,
}

impl MasterInfo {
    /// Flatten into the alternating field-name/field-value sequence that
    /// `SENTINEL MASTERS` replies carry
    pub fn flatten(&self) -> Vec<String> {
        let fields: [(&str, String); 16] = [
            ("name", self.name.clone()),
            ("ip", self.ip.clone()),
            ("port", self.port.to_string()),
            ("runid", self.run_id.clone()),
            ("flags", self.flags.to_string()),
            (
                "link-pending-commands",
                self.link_pending_commands.to_string(),
            ),
            ("link-refcount", self.link_refcount.to_string()),
            ("last-ping-sent", self.last_ping_sent.to_string()),
            ("last-ok-ping-reply", self.last_ok_ping_reply.to_string()),
            ("last-ping-reply", self.last_ping_reply.to_string()),
            ("down-after-milliseconds", self.down_after_ms.to_string()),
            ("num-slaves", self.num_slaves.to_string()),
            ("num-other-sentinels", self.num_other_sentinels.to_string()),
            ("quorum", self.quorum.to_string()),
            ("failover-timeout", self.failover_timeout_ms.to_string()),
            ("parallel-syncs", self.parallel_syncs.to_string()),
        ];

        fields
            .into_iter()
            .flat_map(|(name, value)| [name.to_string(), value])
            .collect()
    }
}

/// Generate a fresh 40-character lowercase hex run id
fn generate_run_id() -> String {
    let mut rng = rand::thread_rng();
    (0..40)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap())
        .collect()
}
