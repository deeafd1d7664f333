//! Pricing HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::services::PricingService;
use crate::domain::pricing::PricingRequest;
use crate::domain::rental::RentalType;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for pricing handlers.
#[derive(Clone)]
pub struct PricingAppState {
    pub pricing_service: Arc<PricingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/pricing/quote",
    tag = "Pricing",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Quote breakdown", body = ApiResponse<PricingBreakdownDto>),
        (status = 400, description = "Pricing failed")
    )
)]
pub async fn quote(
    State(state): State<PricingAppState>,
    ValidatedJson(request): ValidatedJson<QuoteRequest>,
) -> Result<
    Json<ApiResponse<PricingBreakdownDto>>,
    (StatusCode, Json<ApiResponse<PricingBreakdownDto>>),
> {
    let breakdown = state
        .pricing_service
        .quote(&PricingRequest {
            power_bank_type_id: request.power_bank_type_id,
            rental_duration_hours: request.rental_duration_hours,
            rental_type: RentalType::from_str(&request.rental_type),
            scheduled_start_time: request.scheduled_start_time,
            user_id: request.user_id,
        })
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(breakdown.into())))
}
