//! HTTP server for the labor cost engine.
//!
//! Environment:
//! - `LABOR_COST_CONFIG`: configuration directory (default `./config/reform`)
//! - `LABOR_COST_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `LABOR_COST_LOG`: tracing filter (default `info`)

use std::env;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use labor_cost_engine::api::{AppState, create_router};
use labor_cost_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/reform";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LABOR_COST_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_dir = env::var("LABOR_COST_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("LABOR_COST_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let loader = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        initial_hours = loader.config().schedule().initial_hours(),
        changes = loader.config().schedule().changes().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(loader));
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Labor cost engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
