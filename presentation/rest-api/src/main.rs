use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Connects to the document store, wires dependencies, and starts the HTTP server.
/// - config/: Application configuration (server, CORS, database, storefront)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Connect to the document store; a failure here ends the process
    let database = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&database, config.storefront.base_url);

    // 6. Run server
    Server::run(
        config.server,
        config.cors,
        config.storefront.assets_dir,
        container,
    )
    .await?;

    Ok(())
}
