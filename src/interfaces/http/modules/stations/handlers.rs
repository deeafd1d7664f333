//! Station HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::application::services::InventoryService;
use crate::domain::station::Station;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{domain_error, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for station handlers.
#[derive(Clone)]
pub struct StationAppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub inventory_service: Arc<InventoryService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/stations",
    tag = "Stations",
    responses(
        (status = 200, description = "All stations with inventory", body = ApiResponse<Vec<StationWithInventoryDto>>)
    )
)]
pub async fn list_stations(
    State(state): State<StationAppState>,
) -> Result<
    Json<ApiResponse<Vec<StationWithInventoryDto>>>,
    (StatusCode, Json<ApiResponse<Vec<StationWithInventoryDto>>>),
> {
    let stations = state.repos.stations().find_all().await.map_err(domain_error)?;

    let mut result = Vec::with_capacity(stations.len());
    for station in stations {
        let rows = state
            .repos
            .inventory()
            .find_for_station(station.id)
            .await
            .map_err(domain_error)?;

        let total_available = rows.iter().map(|r| r.available_units).sum();
        let low_stock_alert = rows.iter().any(|r| r.is_low_stock());

        result.push(StationWithInventoryDto {
            station: station.into(),
            inventory: rows.into_iter().map(Into::into).collect(),
            total_available,
            low_stock_alert,
        });
    }

    Ok(Json(ApiResponse::success(result)))
}

#[utoipa::path(
    post,
    path = "/api/v1/stations",
    tag = "Stations",
    request_body = CreateStationRequest,
    responses(
        (status = 200, description = "Station created", body = ApiResponse<StationDto>),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn create_station(
    State(state): State<StationAppState>,
    ValidatedJson(request): ValidatedJson<CreateStationRequest>,
) -> Result<Json<ApiResponse<StationDto>>, (StatusCode, Json<ApiResponse<StationDto>>)> {
    let total: i32 = request.inventory.iter().map(|e| e.units).sum();

    let mut station = Station::new(request.name, request.address, total, request.price_per_hour);
    if let (Some(lat), Some(lon)) = (request.latitude, request.longitude) {
        station = station.with_location(lat, lon);
    }

    state
        .repos
        .stations()
        .save(station.clone())
        .await
        .map_err(domain_error)?;

    // Seed one inventory row per requested type
    for entry in &request.inventory {
        if entry.units <= 0 {
            continue;
        }
        state
            .inventory_service
            .upsert_row(station.id, entry.power_bank_type_id, entry.units)
            .await
            .map_err(domain_error)?;
    }

    Ok(Json(ApiResponse::success(station.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/{station_id}",
    tag = "Stations",
    params(("station_id" = Uuid, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station details", body = ApiResponse<StationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_station(
    State(state): State<StationAppState>,
    Path(station_id): Path<Uuid>,
) -> Result<Json<ApiResponse<StationDto>>, (StatusCode, Json<ApiResponse<StationDto>>)> {
    let station = state
        .repos
        .stations()
        .find_by_id(station_id)
        .await
        .map_err(domain_error)?;

    let Some(station) = station else {
        return Err(domain_error(DomainError::NotFound {
            entity: "Station",
            field: "id",
            value: station_id.to_string(),
        }));
    };

    Ok(Json(ApiResponse::success(station.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/stations/{station_id}",
    tag = "Stations",
    params(("station_id" = Uuid, Path, description = "Station ID")),
    request_body = UpdateStationRequest,
    responses(
        (status = 200, description = "Station updated", body = ApiResponse<StationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_station(
    State(state): State<StationAppState>,
    Path(station_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateStationRequest>,
) -> Result<Json<ApiResponse<StationDto>>, (StatusCode, Json<ApiResponse<StationDto>>)> {
    let station = state
        .repos
        .stations()
        .find_by_id(station_id)
        .await
        .map_err(domain_error)?;

    let Some(mut station) = station else {
        return Err(domain_error(DomainError::NotFound {
            entity: "Station",
            field: "id",
            value: station_id.to_string(),
        }));
    };

    if let Some(name) = request.name {
        station.name = name;
    }
    if let Some(address) = request.address {
        station.address = address;
    }
    if let Some(latitude) = request.latitude {
        station.latitude = Some(latitude);
    }
    if let Some(longitude) = request.longitude {
        station.longitude = Some(longitude);
    }
    if let Some(price) = request.price_per_hour {
        station.price_per_hour = price;
    }
    station.updated_at = Utc::now();

    state
        .repos
        .stations()
        .update(station.clone())
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(station.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/stations/{station_id}",
    tag = "Stations",
    params(("station_id" = Uuid, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station deleted", body = ApiResponse<String>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_station(
    State(state): State<StationAppState>,
    Path(station_id): Path<Uuid>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<String>>)> {
    // Hard delete; inventory rows go with the station
    state
        .repos
        .inventory()
        .delete_for_station(station_id)
        .await
        .map_err(domain_error)?;
    state
        .repos
        .stations()
        .delete(station_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(format!(
        "Station {} deleted",
        station_id
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/{station_id}/availability",
    tag = "Stations",
    params(("station_id" = Uuid, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Available units at the station", body = ApiResponse<StationAvailabilityDto>)
    )
)]
pub async fn get_station_availability(
    State(state): State<StationAppState>,
    Path(station_id): Path<Uuid>,
) -> Result<
    Json<ApiResponse<StationAvailabilityDto>>,
    (StatusCode, Json<ApiResponse<StationAvailabilityDto>>),
> {
    let total_available = state
        .inventory_service
        .station_availability(station_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(StationAvailabilityDto {
        station_id,
        total_available,
    })))
}
