//! Station DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::inventory::StationInventory;
use crate::domain::station::Station;

/// Request to create a new station
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStationRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Station-level hourly rate, minor currency units
    #[serde(default)]
    pub price_per_hour: i64,
    /// Optional initial stock per power bank type
    #[serde(default)]
    pub inventory: Vec<InitialInventoryEntry>,
}

/// Initial stock for one power bank type
#[derive(Debug, Deserialize, ToSchema)]
pub struct InitialInventoryEntry {
    pub power_bank_type_id: Uuid,
    pub units: i32,
}

/// Request to update a station
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStationRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price_per_hour: Option<i64>,
}

/// Station details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct StationDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub total_power_banks: i32,
    pub price_per_hour: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Station> for StationDto {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            latitude: s.latitude,
            longitude: s.longitude,
            total_power_banks: s.total_power_banks,
            price_per_hour: s.price_per_hour,
            created_at: s.created_at,
        }
    }
}

/// Inventory row in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryRowDto {
    pub id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    pub total_units: i32,
    pub available_units: i32,
    pub reserved_units: i32,
}

impl From<StationInventory> for InventoryRowDto {
    fn from(row: StationInventory) -> Self {
        Self {
            id: row.id,
            station_id: row.station_id,
            power_bank_type_id: row.power_bank_type_id,
            total_units: row.total_units,
            available_units: row.available_units,
            reserved_units: row.reserved_units,
        }
    }
}

/// Station joined with its inventory and availability summary
#[derive(Debug, Serialize, ToSchema)]
pub struct StationWithInventoryDto {
    #[serde(flatten)]
    pub station: StationDto,
    pub inventory: Vec<InventoryRowDto>,
    pub total_available: i32,
    pub low_stock_alert: bool,
}

/// Availability summary for one station
#[derive(Debug, Serialize, ToSchema)]
pub struct StationAvailabilityDto {
    pub station_id: Uuid,
    pub total_available: i32,
}
