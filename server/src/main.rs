mod assets;
mod config;
mod relay;
mod routes;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

use config::{generate_config_template, Config};
use relay::registry::RelayRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config with layered precedence: defaults < TOML < env < CLI
    let config = Config::load()?;

    // Handle --generate-config: print template and exit
    if config.generate_config {
        print!("{}", generate_config_template());
        return Ok(());
    }

    // Initialize tracing/logging
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "touchcast_server=info".parse().unwrap()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "touchcast_server=info".parse().unwrap()),
            )
            .init();
    }

    tracing::info!("touchcast server v{} starting", env!("CARGO_PKG_VERSION"));

    // Build application state
    let app_state = state::AppState {
        registry: Arc::new(RelayRegistry::new()),
        index_html: config.index_html.clone().into(),
    };

    // Build router
    let app = routes::build_router(app_state);

    // Bind and serve
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Open http://localhost:{} to join the canvas", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
