//! Reservation HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::services::ReservationService;
use crate::interfaces::http::common::{domain_error, ApiResponse};

use super::dto::*;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub reservation_service: Arc<ReservationService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 200, description = "Hold placed for five minutes", body = ApiResponse<ReservationDto>),
        (status = 409, description = "Duplicate active reservation or out of stock")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state
        .reservation_service
        .create_reservation(
            request.user_id,
            request.station_id,
            request.power_bank_type_id,
        )
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "Active reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .reservation_service
        .list_active()
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(
        reservations.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{reservation_id}/complete",
    tag = "Reservations",
    params(("reservation_id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation completed", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn complete_reservation(
    State(state): State<ReservationAppState>,
    Path(reservation_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state
        .reservation_service
        .complete_reservation(reservation_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{reservation_id}/cancel",
    tag = "Reservations",
    params(("reservation_id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationAppState>,
    Path(reservation_id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state
        .reservation_service
        .cancel_reservation(reservation_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/expire",
    tag = "Reservations",
    responses(
        (status = 200, description = "Overdue reservations expired", body = ApiResponse<ExpireSweepResponse>)
    )
)]
pub async fn expire_reservations(
    State(state): State<ReservationAppState>,
) -> Result<
    Json<ApiResponse<ExpireSweepResponse>>,
    (StatusCode, Json<ApiResponse<ExpireSweepResponse>>),
> {
    let expired = state
        .reservation_service
        .expire_overdue()
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(ExpireSweepResponse { expired })))
}
