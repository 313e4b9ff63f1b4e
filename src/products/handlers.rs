use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::extractors::FarmerUser,
    error::ApiError,
    products::{dto::CreateProductRequest, repo_types::Product},
    response::{success, ApiResponse},
    state::AppState,
    validate::ValidatedJson,
};

pub fn product_routes() -> Router<AppState> {
    Router::new().route("/products", get(list_products).post(create_product))
}

/// Extractor order is the authorization order: the farmer gate runs before
/// the body is deserialized or validated.
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    FarmerUser(farmer_id): FarmerUser,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), ApiError> {
    let product = Product::create(&state.db, farmer_id, &payload)
        .await
        .map_err(ApiError::internal)?;

    info!(product_id = %product.id, farmer_id = %farmer_id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(success("Product created successfully", product)),
    ))
}

#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let products = Product::list_all(&state.db)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(success("Products retrieved successfully", products)))
}
