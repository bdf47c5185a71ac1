//! CLI argument definitions using clap
//!
//! Commands:
//! - calcd serve [--host <host>] [--port <port>] [--store-url <url>]

use clap::{Parser, Subcommand};

/// calcd - a small calculation service with persistent history
#[derive(Parser, Debug)]
#[command(name = "calcd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the calculation API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Store connection string; falls back to the CALCD_STORE_URL
        /// environment variable
        #[arg(long)]
        store_url: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
