//! Station inventory repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::StationInventory;
use crate::domain::DomainResult;

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Save a new inventory row
    async fn save(&self, inventory: StationInventory) -> DomainResult<()>;

    /// Find inventory row by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<StationInventory>>;

    /// Find all inventory rows
    async fn find_all(&self) -> DomainResult<Vec<StationInventory>>;

    /// Find all inventory rows for a station
    async fn find_for_station(&self, station_id: Uuid) -> DomainResult<Vec<StationInventory>>;

    /// Find the unique row for a (station, power-bank-type) pair
    async fn find_by_station_and_type(
        &self,
        station_id: Uuid,
        power_bank_type_id: Uuid,
    ) -> DomainResult<Option<StationInventory>>;

    /// Update counters on an existing row
    async fn update(&self, inventory: StationInventory) -> DomainResult<()>;

    /// Conditionally decrement `available_units` by one.
    ///
    /// The update only applies when the row's `available_units` still
    /// equals `expected_available` at write time; this is the only
    /// concurrency guard against two confirmations spending the same
    /// unit. Returns `false` when the write affected zero rows (the
    /// caller must treat that as a conflict and abort).
    async fn decrement_available(
        &self,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        expected_available: i32,
    ) -> DomainResult<bool>;

    /// Overwrite `available_units` on a row (reconciliation sweep)
    async fn set_available(&self, id: Uuid, available_units: i32) -> DomainResult<()>;

    /// Delete all inventory rows for a station
    async fn delete_for_station(&self, station_id: Uuid) -> DomainResult<()>;
}
