//! Power bank type HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::power_bank::PowerBankType;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for power bank type handlers.
#[derive(Clone)]
pub struct PowerBankTypeAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/v1/power-bank-types",
    tag = "Power Bank Types",
    responses(
        (status = 200, description = "All power bank types", body = ApiResponse<Vec<PowerBankTypeDto>>)
    )
)]
pub async fn list_power_bank_types(
    State(state): State<PowerBankTypeAppState>,
) -> Result<
    Json<ApiResponse<Vec<PowerBankTypeDto>>>,
    (StatusCode, Json<ApiResponse<Vec<PowerBankTypeDto>>>),
> {
    let types = state
        .repos
        .power_bank_types()
        .find_all()
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        types.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/power-bank-types",
    tag = "Power Bank Types",
    request_body = CreatePowerBankTypeRequest,
    responses(
        (status = 200, description = "Power bank type created", body = ApiResponse<PowerBankTypeDto>),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn create_power_bank_type(
    State(state): State<PowerBankTypeAppState>,
    ValidatedJson(request): ValidatedJson<CreatePowerBankTypeRequest>,
) -> Result<Json<ApiResponse<PowerBankTypeDto>>, (StatusCode, Json<ApiResponse<PowerBankTypeDto>>)>
{
    let power_bank_type =
        PowerBankType::from_daily_rate(request.name, request.capacity_mah, request.price_per_day);

    state
        .repos
        .power_bank_types()
        .save(power_bank_type.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(power_bank_type.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/power-bank-types/{type_id}",
    tag = "Power Bank Types",
    params(("type_id" = Uuid, Path, description = "Power bank type ID")),
    responses(
        (status = 200, description = "Power bank type details", body = ApiResponse<PowerBankTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_power_bank_type(
    State(state): State<PowerBankTypeAppState>,
    Path(type_id): Path<Uuid>,
) -> Result<Json<ApiResponse<PowerBankTypeDto>>, (StatusCode, Json<ApiResponse<PowerBankTypeDto>>)>
{
    let power_bank_type = state
        .repos
        .power_bank_types()
        .find_by_id(type_id)
        .await
        .map_err(domain_error)?;

    let Some(power_bank_type) = power_bank_type else {
        return Err(domain_error(DomainError::NotFound {
            entity: "PowerBankType",
            field: "id",
            value: type_id.to_string(),
        }));
    };

    Ok(Json(ApiResponse::success(power_bank_type.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/power-bank-types/{type_id}",
    tag = "Power Bank Types",
    params(("type_id" = Uuid, Path, description = "Power bank type ID")),
    request_body = UpdatePowerBankTypeRequest,
    responses(
        (status = 200, description = "Power bank type updated", body = ApiResponse<PowerBankTypeDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_power_bank_type(
    State(state): State<PowerBankTypeAppState>,
    Path(type_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePowerBankTypeRequest>,
) -> Result<Json<ApiResponse<PowerBankTypeDto>>, (StatusCode, Json<ApiResponse<PowerBankTypeDto>>)>
{
    let power_bank_type = state
        .repos
        .power_bank_types()
        .find_by_id(type_id)
        .await
        .map_err(domain_error)?;

    let Some(mut power_bank_type) = power_bank_type else {
        return Err(domain_error(DomainError::NotFound {
            entity: "PowerBankType",
            field: "id",
            value: type_id.to_string(),
        }));
    };

    if let Some(name) = request.name {
        power_bank_type.name = name;
    }
    if let Some(price) = request.price_per_hour {
        power_bank_type.price_per_hour = price;
    }
    if let Some(price) = request.price_per_day {
        power_bank_type.price_per_day = price;
    }
    power_bank_type.updated_at = Utc::now();

    state
        .repos
        .power_bank_types()
        .update(power_bank_type.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(power_bank_type.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/power-bank-types/{type_id}",
    tag = "Power Bank Types",
    params(("type_id" = Uuid, Path, description = "Power bank type ID")),
    responses(
        (status = 200, description = "Power bank type deleted", body = ApiResponse<String>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_power_bank_type(
    State(state): State<PowerBankTypeAppState>,
    Path(type_id): Path<Uuid>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<String>>)> {
    state
        .repos
        .power_bank_types()
        .delete(type_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(format!(
        "Power bank type {} deleted",
        type_id
    ))))
}
