//! Courier API Gateway binary

use anyhow::Result;
use courier_api_gateway::{
    catalog::{InMemoryCatalog, JsonFileCatalog},
    config::{GatewayConfig, LogFormat},
    router, AppState,
};
use courier_common::RateConfig;
use courier_pricing::PricingEngine;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("courier_api_gateway=info".parse()?);
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    info!("Starting Courier API Gateway v{}", courier_common::VERSION);
    info!("Loaded configuration: {:?}", config);

    let engine = PricingEngine::new(RateConfig::default())?;
    info!("Rate table: {:?}", engine.rates());

    let state = match &config.products_file {
        Some(path) => {
            info!("Serving products from {}", path.display());
            AppState::new(engine, JsonFileCatalog::new(path))
        }
        None => AppState::new(engine, InMemoryCatalog::default()),
    };

    let app = router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Courier API Gateway listening on {}", addr);
    info!("Endpoints: /health, /delivery/calculate, /delivery/rates, /products");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down Courier API Gateway");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
