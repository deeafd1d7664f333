//! Inventory service
//!
//! Admin edits of per-station stock counters, availability summaries,
//! and the reconciliation sweep that recomputes `available_units` from
//! the active-rental count.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::inventory::StationInventory;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::events::{InventoryLowEvent, InventorySyncedEvent};
use crate::notifications::{Event, SharedEventBus};

/// One row adjusted by the reconciliation sweep
#[derive(Debug, Clone, Serialize)]
pub struct SyncAdjustment {
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    pub old_available: i32,
    pub new_available: i32,
}

/// Result of one reconciliation run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub rows_checked: usize,
    pub adjustments: Vec<SyncAdjustment>,
}

/// Service for station inventory administration
pub struct InventoryService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl InventoryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    /// List the inventory rows of a station
    pub async fn list_for_station(&self, station_id: Uuid) -> DomainResult<Vec<StationInventory>> {
        self.repos.inventory().find_for_station(station_id).await
    }

    /// Total available units across a station's rows
    pub async fn station_availability(&self, station_id: Uuid) -> DomainResult<i32> {
        let rows = self.repos.inventory().find_for_station(station_id).await?;
        Ok(rows.iter().map(|r| r.available_units).sum())
    }

    /// Create or overwrite the inventory row for a (station, type) pair.
    ///
    /// Setting `total_units` resets `available_units` to the same value;
    /// drift introduced by in-flight rentals is the sync job's problem.
    pub async fn upsert_row(
        &self,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        total_units: i32,
    ) -> DomainResult<StationInventory> {
        if total_units < 0 {
            return Err(DomainError::Validation(
                "total_units must not be negative".to_string(),
            ));
        }

        let existing = self
            .repos
            .inventory()
            .find_by_station_and_type(station_id, power_bank_type_id)
            .await?;

        let row = match existing {
            Some(mut row) => {
                row.total_units = total_units;
                row.available_units = total_units;
                row.updated_at = Utc::now();
                self.repos.inventory().update(row.clone()).await?;
                row
            }
            None => {
                let row = StationInventory::new(station_id, power_bank_type_id, total_units);
                self.repos.inventory().save(row.clone()).await?;
                row
            }
        };

        if row.is_low_stock() {
            self.event_bus.publish(Event::InventoryLow(InventoryLowEvent {
                station_id,
                power_bank_type_id,
                available_units: row.available_units,
                timestamp: Utc::now(),
            }));
        }

        Ok(row)
    }

    /// Reconcile every inventory row against the active-rental count.
    ///
    /// Recomputes `available_units = max(0, total_units - active)` and
    /// updates rows that drifted. The active-rental count is ground
    /// truth; reserved units are deliberately ignored. Per-row update
    /// failures are recorded and skipped so one bad row cannot stall
    /// the sweep.
    pub async fn sync_inventory(&self) -> DomainResult<SyncReport> {
        let active_rentals = self.repos.rentals().find_active().await?;
        let rows = self.repos.inventory().find_all().await?;

        let rows_checked = rows.len();
        let mut adjustments = Vec::new();

        for row in rows {
            let rented = active_rentals
                .iter()
                .filter(|r| {
                    r.station_id == row.station_id
                        && r.power_bank_type_id == row.power_bank_type_id
                })
                .count() as i32;

            let correct = row.reconciled_available(rented);
            if correct == row.available_units {
                continue;
            }

            if let Err(e) = self.repos.inventory().set_available(row.id, correct).await {
                warn!(
                    inventory_id = %row.id,
                    error = %e,
                    "Inventory sync: row update failed"
                );
                continue;
            }

            adjustments.push(SyncAdjustment {
                station_id: row.station_id,
                power_bank_type_id: row.power_bank_type_id,
                old_available: row.available_units,
                new_available: correct,
            });
        }

        info!(
            rows_checked,
            rows_adjusted = adjustments.len(),
            "Inventory reconciliation finished"
        );

        self.event_bus
            .publish(Event::InventorySynced(InventorySyncedEvent {
                rows_checked,
                rows_adjusted: adjustments.len(),
                timestamp: Utc::now(),
            }));

        Ok(SyncReport {
            rows_checked,
            adjustments,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::booking::{Booking, PaymentMethod};
    use crate::domain::rental::Rental;
    use crate::notifications::create_event_bus;

    fn service(repos: Arc<InMemoryRepos>) -> InventoryService {
        InventoryService::new(repos, create_event_bus())
    }

    fn seed_row(repos: &InMemoryRepos, total: i32, available: i32) -> StationInventory {
        let mut row = StationInventory::new(Uuid::new_v4(), Uuid::new_v4(), total);
        row.available_units = available;
        repos.inventory.lock().unwrap().push(row.clone());
        row
    }

    fn active_rental(station_id: Uuid, type_id: Uuid) -> Rental {
        let booking = Booking::new(
            Uuid::new_v4(),
            station_id,
            type_id,
            480_000,
            PaymentMethod::BankTransfer,
        );
        Rental::from_confirmed_booking(&booking, None)
    }

    #[tokio::test]
    async fn sync_recomputes_from_active_rental_count() {
        let repos = Arc::new(InMemoryRepos::new());
        // 5 total, drifted to 5 available despite 2 active rentals
        let row = seed_row(&repos, 5, 5);
        for _ in 0..2 {
            repos
                .rentals
                .lock()
                .unwrap()
                .push(active_rental(row.station_id, row.power_bank_type_id));
        }

        let report = service(repos.clone()).sync_inventory().await.unwrap();

        assert_eq!(report.rows_checked, 1);
        assert_eq!(report.adjustments.len(), 1);
        assert_eq!(report.adjustments[0].old_available, 5);
        assert_eq!(report.adjustments[0].new_available, 3);
        assert_eq!(
            repos.available_units(row.station_id, row.power_bank_type_id),
            Some(3)
        );
    }

    #[tokio::test]
    async fn sync_never_goes_negative() {
        let repos = Arc::new(InMemoryRepos::new());
        let row = seed_row(&repos, 1, 1);
        for _ in 0..3 {
            repos
                .rentals
                .lock()
                .unwrap()
                .push(active_rental(row.station_id, row.power_bank_type_id));
        }

        service(repos.clone()).sync_inventory().await.unwrap();
        assert_eq!(
            repos.available_units(row.station_id, row.power_bank_type_id),
            Some(0)
        );
    }

    #[tokio::test]
    async fn sync_leaves_consistent_rows_alone() {
        let repos = Arc::new(InMemoryRepos::new());
        let row = seed_row(&repos, 5, 4);
        repos
            .rentals
            .lock()
            .unwrap()
            .push(active_rental(row.station_id, row.power_bank_type_id));

        let report = service(repos.clone()).sync_inventory().await.unwrap();
        assert!(report.adjustments.is_empty());
    }

    #[tokio::test]
    async fn upsert_resets_available_to_total() {
        let repos = Arc::new(InMemoryRepos::new());
        let row = seed_row(&repos, 5, 2);
        let svc = service(repos.clone());

        let updated = svc
            .upsert_row(row.station_id, row.power_bank_type_id, 8)
            .await
            .unwrap();
        assert_eq!(updated.total_units, 8);
        assert_eq!(updated.available_units, 8);
    }

    #[tokio::test]
    async fn upsert_creates_missing_row() {
        let repos = Arc::new(InMemoryRepos::new());
        let svc = service(repos.clone());

        let station_id = Uuid::new_v4();
        let type_id = Uuid::new_v4();
        svc.upsert_row(station_id, type_id, 6).await.unwrap();
        assert_eq!(repos.available_units(station_id, type_id), Some(6));
    }

    #[tokio::test]
    async fn negative_total_rejected() {
        let repos = Arc::new(InMemoryRepos::new());
        let svc = service(repos);
        let err = svc
            .upsert_row(Uuid::new_v4(), Uuid::new_v4(), -1)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn station_availability_sums_rows() {
        let repos = Arc::new(InMemoryRepos::new());
        let station_id = Uuid::new_v4();
        for available in [2, 3] {
            let mut row = StationInventory::new(station_id, Uuid::new_v4(), 5);
            row.available_units = available;
            repos.inventory.lock().unwrap().push(row);
        }

        let svc = service(repos);
        assert_eq!(svc.station_availability(station_id).await.unwrap(), 5);
    }
}
