//! Inventory HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::application::services::InventoryService;
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::stations::InventoryRowDto;

use super::dto::*;

/// Application state for inventory handlers.
#[derive(Clone)]
pub struct InventoryAppState {
    pub inventory_service: Arc<InventoryService>,
}

#[utoipa::path(
    put,
    path = "/api/v1/stations/{station_id}/inventory/{type_id}",
    tag = "Inventory",
    params(
        ("station_id" = Uuid, Path, description = "Station ID"),
        ("type_id" = Uuid, Path, description = "Power bank type ID")
    ),
    request_body = SetInventoryRequest,
    responses(
        (status = 200, description = "Inventory row updated", body = ApiResponse<InventoryRowDto>),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn set_inventory(
    State(state): State<InventoryAppState>,
    Path((station_id, type_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(request): ValidatedJson<SetInventoryRequest>,
) -> Result<Json<ApiResponse<InventoryRowDto>>, (StatusCode, Json<ApiResponse<InventoryRowDto>>)> {
    let row = state
        .inventory_service
        .upsert_row(station_id, type_id, request.total_units)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(row.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/inventory/sync",
    tag = "Inventory",
    responses(
        (status = 200, description = "Reconciliation report", body = ApiResponse<SyncReportDto>)
    )
)]
pub async fn sync_inventory(
    State(state): State<InventoryAppState>,
) -> Result<Json<ApiResponse<SyncReportDto>>, (StatusCode, Json<ApiResponse<SyncReportDto>>)> {
    let report = state
        .inventory_service
        .sync_inventory()
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(report.into())))
}
