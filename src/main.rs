//! REST server for the country data service
//!
//! Usage:
//!   ./target/release/country_data [options]
//!
//! Options:
//!   --port PORT   Port to listen on (default: 3000, env: PORT)
//!   --host HOST   Interface to bind (default: 0.0.0.0, env: HOST)
//!
//! REST endpoints:
//!   GET  /health           - Health check
//!   POST /country-data     - get_entry / search / same_country
//!   POST /container-check  - Container configuration check

use anyhow::Result;
use clap::Parser;
use country_data::api::{create_router, CountryDataService};
use country_data::config::ServerConfig;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_banner(config: &ServerConfig, entries: usize) {
    println!("============================================================");
    println!("              COUNTRY DATA API SERVER");
    println!("============================================================");
    println!();
    println!("  Listen:   http://{}", config.socket_addr());
    println!("  Entries:  {}", entries);
    println!();
    println!("REST Endpoints:");
    println!("  GET  /health              Health check");
    println!("  POST /country-data        get_entry | search | same_country");
    println!("  POST /container-check     Container configuration check");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let config = ServerConfig::parse();
    let service = Arc::new(CountryDataService::default());
    print_banner(&config, service.entries().len());

    let app = create_router(service);
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
