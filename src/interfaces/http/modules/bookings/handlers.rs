//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::services::{BookingService, RentalOrchestrator};
use crate::domain::booking::PaymentMethod;
use crate::interfaces::http::common::{domain_error, ApiResponse};
use crate::interfaces::http::modules::rentals::RentalDto;

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub booking_service: Arc<BookingService>,
    pub orchestrator: Arc<RentalOrchestrator>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created with order id", body = ApiResponse<BookingDto>),
        (status = 404, description = "Unknown station or power bank type")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .booking_service
        .create_booking(
            request.user_id,
            request.station_id,
            request.power_bank_type_id,
            PaymentMethod::from_str(&request.payment_method),
        )
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "All bookings", body = ApiResponse<Vec<BookingDto>>)
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
) -> Result<Json<ApiResponse<Vec<BookingDto>>>, (StatusCode, Json<ApiResponse<Vec<BookingDto>>>)> {
    let bookings = state.booking_service.list().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        bookings.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/by-order/{order_id}",
    tag = "Bookings",
    params(("order_id" = String, Path, description = "Human-readable order id, e.g. BK-482913057")),
    responses(
        (status = 200, description = "Booking found", body = ApiResponse<BookingDto>),
        (status = 404, description = "No booking with this order id")
    )
)]
pub async fn get_booking_by_order_id(
    State(state): State<BookingAppState>,
    Path(order_id): Path<String>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .booking_service
        .find_by_order_id(order_id.trim())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{booking_id}/confirm-payment",
    tag = "Bookings",
    params(("booking_id" = Uuid, Path, description = "Booking ID")),
    request_body = ConfirmPaymentRequest,
    responses(
        (status = 200, description = "Payment confirmed, rental created", body = ApiResponse<RentalDto>),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Already confirmed, duplicate rental, or inventory failure")
    )
)]
pub async fn confirm_payment(
    State(state): State<BookingAppState>,
    Path(booking_id): Path<Uuid>,
    request: Option<Json<ConfirmPaymentRequest>>,
) -> Result<Json<ApiResponse<RentalDto>>, (StatusCode, Json<ApiResponse<RentalDto>>)> {
    let return_time = request.and_then(|Json(r)| r.return_time);

    let rental = state
        .orchestrator
        .confirm_payment(booking_id, return_time)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(rental.into())))
}
