//! CLI command implementations
//!
//! `serve` resolves the store connection string (flag, then environment,
//! then the built-in default), builds the application context, and runs
//! the HTTP server on a multi-threaded runtime until the process is
//! stopped.

use crate::context::AppContext;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Service name stamped on every log line
const SERVICE_NAME: &str = "calcd";

/// Environment variable carrying the store connection string
const STORE_URL_ENV: &str = "CALCD_STORE_URL";

/// Fallback when neither flag nor environment provides a store URL
const DEFAULT_STORE_URL: &str = "memory://calculations";

/// Parse arguments and dispatch to the requested command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            host,
            port,
            store_url,
        } => serve(host, port, store_url),
    }
}

fn serve(host: String, port: u16, store_url: Option<String>) -> CliResult<()> {
    let store_url = resolve_store_url(store_url);

    let logger = Logger::new(SERVICE_NAME);
    logger.info("store_connect", &[("url", &store_url)]);

    let store = store::connect(&store_url)?;
    let context = AppContext::new(logger, store);

    let config = HttpServerConfig {
        host,
        port,
        cors_origins: Vec::new(),
    };
    let server = HttpServer::with_config(config, context);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Flag wins over environment; environment wins over the default.
fn resolve_store_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(STORE_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_STORE_URL.to_string())
}
