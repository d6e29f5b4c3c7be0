//! minisentinel Server Binary
//!
//! Starts the sentinel TCP listener.

use clap::Parser;
use minisentinel::{Config, Server};
use tracing_subscriber::{fmt, EnvFilter};

/// minisentinel Server
#[derive(Parser, Debug)]
#[command(name = "minisentinel-server")]
#[command(about = "RESP sentinel emulator for topology discovery")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:26379")]
    listen: String,

    /// Name of the monitored master
    #[arg(long, default_value = "mymaster")]
    master_name: String,

    /// Address of the monitored master (host:port)
    #[arg(long, default_value = "127.0.0.1:6379")]
    master: String,

    /// Address of a monitored replica (host:port); repeatable
    #[arg(short, long = "replica")]
    replicas: Vec<String>,

    /// Quorum reported for the monitored master
    #[arg(short, long, default_value = "2")]
    quorum: u32,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,minisentinel=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("minisentinel Server v{}", minisentinel::VERSION);
    tracing::info!("Listen address: {}", args.listen);
    tracing::info!("Monitoring: {} at {}", args.master_name, args.master);

    // Build config from args
    let config = Config::builder()
        .listen_addr(&args.listen)
        .master_name(&args.master_name)
        .master_addr(&args.master)
        .replica_addrs(args.replicas)
        .quorum(args.quorum)
        .build();

    // Bind and serve
    let mut server = match Server::bind(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
