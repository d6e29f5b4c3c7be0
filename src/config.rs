//! Configuration for minisentinel
//!
//! Centralized configuration with sensible defaults.

/// Default quorum reported for the monitored master
pub const DEFAULT_QUORUM: u32 = 2;

/// Default down-after-milliseconds reported for the monitored master
pub const DEFAULT_DOWN_AFTER_MS: u64 = 30_000;

/// Default failover timeout reported for the monitored master
pub const DEFAULT_FAILOVER_TIMEOUT_MS: u64 = 180_000;

/// Default parallel syncs reported for the monitored master
pub const DEFAULT_PARALLEL_SYNCS: u32 = 1;

/// Main configuration for a minisentinel instance
///
/// Immutable by convention: built once (literal or via [`ConfigBuilder`]) and
/// passed by value. The topology it names is fixed for the server's lifetime;
/// there is no runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address for the sentinel itself
    pub listen_addr: String,

    // -------------------------------------------------------------------------
    // Monitored Topology
    // -------------------------------------------------------------------------
    /// Name of the monitored master (e.g. "mymaster")
    pub master_name: String,

    /// Address of the monitored master, "host:port"
    pub master_addr: String,

    /// Addresses of the monitored replicas, "host:port" each
    pub replica_addrs: Vec<String>,

    // -------------------------------------------------------------------------
    // Reported Sentinel Constants
    // -------------------------------------------------------------------------
    /// Quorum reported in master-info snapshots
    pub quorum: u32,

    /// down-after-milliseconds reported in master-info snapshots
    pub down_after_ms: u64,

    /// failover-timeout reported in master-info snapshots
    pub failover_timeout_ms: u64,

    /// parallel-syncs reported in master-info snapshots
    pub parallel_syncs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:26379".to_string(),
            master_name: "mymaster".to_string(),
            master_addr: "127.0.0.1:6379".to_string(),
            replica_addrs: Vec::new(),
            quorum: DEFAULT_QUORUM,
            down_after_ms: DEFAULT_DOWN_AFTER_MS,
            failover_timeout_ms: DEFAULT_FAILOVER_TIMEOUT_MS,
            parallel_syncs: DEFAULT_PARALLEL_SYNCS,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address for the sentinel
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the monitored master's name
    pub fn master_name(mut self, name: impl Into<String>) -> Self {
        self.config.master_name = name.into();
        self
    }

    /// Set the monitored master's address ("host:port")
    pub fn master_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.master_addr = addr.into();
        self
    }

    /// Add one replica address ("host:port")
    pub fn replica_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.replica_addrs.push(addr.into());
        self
    }

    /// Replace the whole replica set
    pub fn replica_addrs(mut self, addrs: Vec<String>) -> Self {
        self.config.replica_addrs = addrs;
        self
    }

    /// Set the reported quorum
    pub fn quorum(mut self, quorum: u32) -> Self {
        self.config.quorum = quorum;
        self
    }

    /// Set the reported down-after-milliseconds
    pub fn down_after_ms(mut self, ms: u64) -> Self {
        self.config.down_after_ms = ms;
        self
    }

    /// Set the reported failover timeout (milliseconds)
    pub fn failover_timeout_ms(mut self, ms: u64) -> Self {
        self.config.failover_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
