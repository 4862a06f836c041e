use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog service entry point
///
/// Initializes logging and configuration, picks the product repository,
/// wires the catalog service and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Any uncaught fault is fatal: log it and exit
    install_fail_fast_hook();

    // 4. Load configuration
    let config = AppConfig::from_env()?;

    // 5. Pick the repository and wire dependencies
    let repository = database_config::init_repository(&config.database).await?;
    let container = DependencyContainer::new(repository);

    // 6. Run server
    if let Err(err) = Server::run(config, container).await {
        tracing::error!(error = %err, "server stopped");
        return Err(err);
    }

    Ok(())
}

fn install_fail_fast_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(fault = %info, "uncaught fault, shutting down");
        std::process::exit(1);
    }));
}
