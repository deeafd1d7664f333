//! Rental HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::services::RentalOrchestrator;
use crate::domain::rental::{ExtensionUnit, RentalType};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for rental handlers.
#[derive(Clone)]
pub struct RentalAppState {
    pub orchestrator: Arc<RentalOrchestrator>,
}

#[utoipa::path(
    get,
    path = "/api/v1/rentals",
    tag = "Rentals",
    responses(
        (status = 200, description = "All rentals", body = ApiResponse<Vec<RentalDto>>)
    )
)]
pub async fn list_rentals(
    State(state): State<RentalAppState>,
) -> Result<Json<ApiResponse<Vec<RentalDto>>>, (StatusCode, Json<ApiResponse<Vec<RentalDto>>>)> {
    let rentals = state.orchestrator.list().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        rentals.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/rentals",
    tag = "Rentals",
    request_body = StartRentalRequest,
    responses(
        (status = 200, description = "Rental started or scheduled", body = ApiResponse<RentalDto>),
        (status = 400, description = "Pricing failed")
    )
)]
pub async fn start_rental(
    State(state): State<RentalAppState>,
    ValidatedJson(request): ValidatedJson<StartRentalRequest>,
) -> Result<Json<ApiResponse<RentalDto>>, (StatusCode, Json<ApiResponse<RentalDto>>)> {
    let rental = state
        .orchestrator
        .start_rental(
            request.user_id,
            request.station_id,
            request.power_bank_type_id,
            request.rental_duration_hours,
            RentalType::from_str(&request.rental_type),
            request.scheduled_start_time,
        )
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(rental.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/rentals/{rental_id}",
    tag = "Rentals",
    params(("rental_id" = Uuid, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental details", body = ApiResponse<RentalDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_rental(
    State(state): State<RentalAppState>,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<ApiResponse<RentalDto>>, (StatusCode, Json<ApiResponse<RentalDto>>)> {
    let rental = state.orchestrator.get(rental_id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(rental.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/rentals/{rental_id}/confirm-return",
    tag = "Rentals",
    params(("rental_id" = Uuid, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Return confirmed", body = ApiResponse<RentalDto>),
        (status = 404, description = "Rental not found"),
        (status = 409, description = "Rental is not active")
    )
)]
pub async fn confirm_return(
    State(state): State<RentalAppState>,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<ApiResponse<RentalDto>>, (StatusCode, Json<ApiResponse<RentalDto>>)> {
    let rental = state
        .orchestrator
        .confirm_return(rental_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(rental.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/rentals/{rental_id}/force-return",
    tag = "Rentals",
    params(("rental_id" = Uuid, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental force-returned", body = ApiResponse<RentalDto>),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn force_return(
    State(state): State<RentalAppState>,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<ApiResponse<RentalDto>>, (StatusCode, Json<ApiResponse<RentalDto>>)> {
    let rental = state
        .orchestrator
        .force_return(rental_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(rental.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/rentals/{rental_id}/extend",
    tag = "Rentals",
    params(("rental_id" = Uuid, Path, description = "Rental ID")),
    request_body = ExtendRentalRequest,
    responses(
        (status = 200, description = "End time extended", body = ApiResponse<RentalDto>),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn extend_rental(
    State(state): State<RentalAppState>,
    Path(rental_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ExtendRentalRequest>,
) -> Result<Json<ApiResponse<RentalDto>>, (StatusCode, Json<ApiResponse<RentalDto>>)> {
    let rental = state
        .orchestrator
        .extend_rental(
            rental_id,
            request.amount,
            ExtensionUnit::from_str(&request.unit),
        )
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(rental.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/rentals/{rental_id}/cancel",
    tag = "Rentals",
    params(("rental_id" = Uuid, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental cancelled", body = ApiResponse<RentalDto>),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn cancel_rental(
    State(state): State<RentalAppState>,
    Path(rental_id): Path<Uuid>,
) -> Result<Json<ApiResponse<RentalDto>>, (StatusCode, Json<ApiResponse<RentalDto>>)> {
    let rental = state
        .orchestrator
        .cancel_rental(rental_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(rental.into())))
}
