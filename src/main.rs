use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use weather_proxy::config::loader;
use weather_proxy::lifecycle::{signals, Shutdown};
use weather_proxy::observability::logging;
use weather_proxy::HttpServer;

/// Server-side proxy for browser weather queries.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => loader::from_env(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        api_key_set = config.upstream.api_key.is_some(),
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::ctrl_c_to_shutdown(&shutdown).await;
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
