//! Console Entry Point
//!
//! Startup wiring: configuration, HTTP client, local store, and the
//! service strategy for this run. Uses `anyhow` for startup errors;
//! everything past startup reports through the domain error types.

use std::sync::Arc;

use auth::infra::ConfiguredGateway;
use directory::{FallbackDirectory, MockDirectory, RemoteDirectory};
use platform::{ApiClient, ConsoleConfig, LocalStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod console;
mod render;

use console::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console=info,auth=info,directory=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConsoleConfig::from_env();
    let client = Arc::new(ApiClient::new(&config)?);
    let local = LocalStore::open(&config.state_dir)?;

    tracing::info!(
        api_base_url = %config.api_base_url,
        app_alias = %config.app_alias,
        dev_mode = config.dev_mode,
        "Console starting"
    );

    // The strategy is chosen once here; nothing re-decides it at runtime.
    let gateway = Arc::new(ConfiguredGateway::from_config(&config, Arc::clone(&client)));
    let remote = RemoteDirectory::new(Arc::clone(&client));

    if config.dev_mode {
        let services = Arc::new(FallbackDirectory::new(
            Arc::new(remote),
            Arc::new(MockDirectory::new()),
        ));
        Console::new(config, client, local, services, gateway)
            .run()
            .await
    } else {
        Console::new(config, client, local, Arc::new(remote), gateway)
            .run()
            .await
    }
}
