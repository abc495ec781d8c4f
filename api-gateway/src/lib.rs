//! Courier API Gateway
//!
//! HTTP surface of the delivery quote service:
//! - `POST /delivery/calculate`: cost and itemized breakdown for a shipment
//! - `GET /delivery/rates`: the rate table quotes are computed against
//! - `GET /products`: product records from the configured catalog
//! - `GET /health`: liveness probe
//!
//! Cross-origin requests are accepted from any origin.

pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use courier_pricing::PricingEngine;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::catalog::ProductCatalog;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<PricingEngine>,
    pub catalog: Arc<dyn ProductCatalog>,
}

impl AppState {
    pub fn new(engine: PricingEngine, catalog: impl ProductCatalog + 'static) -> Self {
        Self {
            engine: Arc::new(engine),
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the gateway router with tracing, compression and CORS applied
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Delivery pricing
        .route("/delivery/calculate", post(handlers::calculate_delivery))
        .route("/delivery/rates", get(handlers::get_rates))
        // Products
        .route("/products", get(handlers::list_products))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
