//! # scriptdeckd — scriptdeck daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing from the configured filter
//! - Construct the script repository (adapter)
//! - Construct the application service, injecting the repository via its port
//! - Load the initial catalog
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use scriptdeck_adapter_http_axum::state::AppState;
use scriptdeck_adapter_virtual::VirtualScriptRepository;
use scriptdeck_app::services::script_service::ScriptService;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Repository: the built-in demo catalog, unless the config overrides it.
    let catalog_override = config.scripts_catalog()?;
    let repo = if catalog_override.is_empty() {
        VirtualScriptRepository::default()
    } else {
        VirtualScriptRepository::with_scripts(catalog_override)
    };

    // Service
    let service = Arc::new(ScriptService::new(repo));
    service.load().await?;

    // HTTP
    let state = AppState::from_arc(service);
    let app = scriptdeck_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("scriptdeckd listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
