//! VCC Client
//!
//! A terminal client for the VCC vehicle registration service: record CRUD
//! through the remote REST API, session handling, and printable certificate
//! export with an embedded public-view QR code.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vcc_client::cli;
use vcc_client::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Remote service: {}", config.base_url);
    tracing::debug!("Public origin: {}", config.public_origin);
    tracing::debug!("State directory: {:?}", config.state_dir);

    let cli = cli::Cli::parse();
    cli::run(cli, config).await
}
