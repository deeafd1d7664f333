//! Payment HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::services::PaymentService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for payment handlers.
#[derive(Clone)]
pub struct PaymentAppState {
    pub payment_service: Arc<PaymentService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/payments/card",
    tag = "Payments",
    request_body = CardPaymentRequest,
    responses(
        (status = 200, description = "Card charged, transaction recorded", body = ApiResponse<TransactionDto>),
        (status = 404, description = "Rental not found"),
        (status = 400, description = "Gateway rejected the charge")
    )
)]
pub async fn charge_card(
    State(state): State<PaymentAppState>,
    ValidatedJson(request): ValidatedJson<CardPaymentRequest>,
) -> Result<Json<ApiResponse<TransactionDto>>, (StatusCode, Json<ApiResponse<TransactionDto>>)> {
    let transaction = state
        .payment_service
        .charge_card(request.rental_id, request.amount, &request.phone)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(transaction.into())))
}
