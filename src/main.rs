//! Fairroll server binary.
//!
//! HTTP service for verifying provably-fair roll records.

use clap::Parser;
use fairroll::api::ApiServer;
use fairroll::config::FairrollConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fairroll")]
#[command(about = "Provably-fair roll verification server", long_about = None)]
struct Args {
    /// Server host
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(long)]
    port: Option<u16>,

    /// Allowed CORS origins (comma-separated, use * for all)
    #[arg(long)]
    cors_origins: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// TOML configuration file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FairrollConfig::load(path)?,
        None => FairrollConfig::default(),
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(origins) = args.cors_origins {
        config.server.allowed_origins = origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .collect();
    }
    if let Some(timeout) = args.timeout {
        config.server.request_timeout_secs = timeout;
    }

    config.validate()?;

    let server = ApiServer::new(config.server);
    server.run().await?;

    Ok(())
}
