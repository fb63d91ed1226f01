use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;

use notebook::cli::{Cli, Commands};
use notebook::logging::init_tracing;
use notebook::router::init_router;
use notebook::state::init_app_state;
use notebook_config::{DatabaseConfig, ServerConfig};
use notebook_db::{init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    match Cli::parse().into_command() {
        Commands::Serve { port, storage } => {
            let mut server_config = ServerConfig::from_env();
            if let Some(port) = port {
                server_config.port = port;
            }
            if let Some(storage) = storage {
                server_config.storage = storage;
            }
            serve(server_config).await
        }
        Commands::Migrate => {
            let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
            run_migrations(&pool).await
        }
    }
}

async fn serve(server_config: ServerConfig) -> anyhow::Result<()> {
    let state = init_app_state(&server_config).await?;
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        address = %address,
        storage = %server_config.storage,
        "Server running, API reference at /scalar"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
