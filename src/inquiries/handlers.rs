use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::ApiError,
    inquiries::{dto::CreateInquiryRequest, repo_types::Inquiry},
    response::{success, ApiResponse},
    state::AppState,
    validate::{ApiPath, ValidatedJson},
};

pub fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/inquiries", post(create_inquiry))
        .route("/inquiries/:product_id", get(list_inquiries_by_product))
}

#[instrument(skip(state, payload))]
pub async fn create_inquiry(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateInquiryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Inquiry>>), ApiError> {
    let inquiry = Inquiry::create(&state.db, &payload)
        .await
        .map_err(ApiError::internal)?;

    info!(inquiry_id = %inquiry.id, product_id = %inquiry.product, "inquiry created");
    Ok((
        StatusCode::CREATED,
        Json(success("Inquiry created successfully", inquiry)),
    ))
}

#[instrument(skip(state))]
pub async fn list_inquiries_by_product(
    State(state): State<AppState>,
    ApiPath(product_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Inquiry>>>, ApiError> {
    let inquiries = Inquiry::list_by_product(&state.db, product_id)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(success("Inquiries retrieved successfully", inquiries)))
}
