//! minisentinel CLI Client
//!
//! Command-line interface for querying a running sentinel.

use clap::{Parser, Subcommand};
use minisentinel::{Client, Frame, Result};

/// minisentinel CLI
#[derive(Parser, Debug)]
#[command(name = "minisentinel-cli")]
#[command(about = "CLI for querying a minisentinel server")]
struct Args {
    /// Sentinel address
    #[arg(short, long, default_value = "127.0.0.1:26379")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ping the sentinel
    Ping,

    /// List the monitored masters
    Masters,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut client = Client::connect(&args.server)?;

    match args.command {
        Commands::Ping => {
            let reply = client.call(&["PING"])?;
            print_frame(&reply, 0);
        }
        Commands::Masters => {
            let reply = client.call(&["SENTINEL", "MASTERS"])?;
            print_frame(&reply, 0);
        }
    }

    Ok(())
}

/// Print a reply frame, redis-cli style
fn print_frame(frame: &Frame, indent: usize) {
    let pad = "  ".repeat(indent);
    match frame {
        Frame::Simple(text) => println!("{}{}", pad, text),
        Frame::Error(message) => println!("{}(error) {}", pad, message),
        Frame::Integer(n) => println!("{}(integer) {}", pad, n),
        Frame::Bulk(Some(payload)) => {
            println!("{}\"{}\"", pad, String::from_utf8_lossy(payload))
        }
        Frame::Bulk(None) => println!("{}(nil)", pad),
        Frame::Array(Some(elements)) => {
            for (i, element) in elements.iter().enumerate() {
                print!("{}{}) ", pad, i + 1);
                match element {
                    Frame::Array(Some(_)) => {
                        println!();
                        print_frame(element, indent + 1);
                    }
                    _ => print_frame(element, 0),
                }
            }
        }
        Frame::Array(None) => println!("{}(nil)", pad),
    }
}
