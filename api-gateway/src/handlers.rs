//! Route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use courier_common::{DeliveryQuote, RateConfig};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    dto::{CalculateRequest, ProductsResponse},
    error::ApiError,
    AppState,
};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /delivery/calculate`
pub async fn calculate_delivery(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DeliveryQuote>, ApiError> {
    let Json(body) = body?;
    let request = CalculateRequest::from_json(body)
        .ok_or_else(|| ApiError::BadRequest("request body must be a JSON object".to_string()))?;
    let shipment = request.into_shipment()?;

    let quote = state.engine.quote(&shipment)?;
    info!(
        weight = %shipment.weight,
        distance = %shipment.distance,
        cost = %quote.cost,
        "Quoted delivery"
    );

    Ok(Json(quote))
}

/// `GET /delivery/rates`
pub async fn get_rates(State(state): State<AppState>) -> Json<RateConfig> {
    Json(state.engine.rates().clone())
}

/// `GET /products`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = state.catalog.list_products().await?;
    Ok(Json(ProductsResponse { products }))
}
