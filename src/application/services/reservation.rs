//! Reservation service
//!
//! Creates and releases the short-lived advisory holds that precede
//! payment. Holds never touch inventory counters; the only enforcement
//! is the one-active-reservation-per-user rule plus a stock check at
//! creation time.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::reservation::Reservation;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::events::ReservationExpiredEvent;
use crate::notifications::{Event, SharedEventBus};

/// Service for reservation holds
pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    /// Place a 5-minute hold on a (station, power-bank-type) for a user.
    ///
    /// Rejected when the user already holds an active reservation, or
    /// when the targeted inventory row has no available units. Both
    /// checks are advisory: nothing is decremented, and two users can
    /// still race to the final allocation at confirmation time.
    pub async fn create_reservation(
        &self,
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
    ) -> DomainResult<Reservation> {
        if self
            .repos
            .reservations()
            .find_active_for_user(user_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateActiveReservation);
        }

        let inventory = self
            .repos
            .inventory()
            .find_by_station_and_type(station_id, power_bank_type_id)
            .await?;

        match inventory {
            Some(row) if row.is_in_stock() => {}
            _ => return Err(DomainError::OutOfStock),
        }

        let reservation = Reservation::new(user_id, station_id, power_bank_type_id);
        self.repos.reservations().save(reservation.clone()).await?;

        info!(
            reservation_id = %reservation.id,
            user_id = %user_id,
            expires_at = %reservation.expires_at,
            "Reservation created"
        );

        Ok(reservation)
    }

    /// Mark a reservation as completed (a rental materialized from it)
    pub async fn complete_reservation(&self, id: Uuid) -> DomainResult<Reservation> {
        let mut reservation = self.require(id).await?;
        reservation.complete();
        self.repos.reservations().update(reservation.clone()).await?;
        Ok(reservation)
    }

    /// Cancel a reservation, freeing the implicit hold.
    ///
    /// Cancellation reuses the expired status; no inventory column is
    /// touched because none was decremented at hold time.
    pub async fn cancel_reservation(&self, id: Uuid) -> DomainResult<Reservation> {
        let mut reservation = self.require(id).await?;
        reservation.expire();
        self.repos.reservations().update(reservation.clone()).await?;

        info!(reservation_id = %id, "Reservation cancelled");
        Ok(reservation)
    }

    /// List all currently active holds, newest first
    pub async fn list_active(&self) -> DomainResult<Vec<Reservation>> {
        self.repos.reservations().find_active().await
    }

    /// Flip every active reservation past its deadline to expired.
    ///
    /// Returns the number of reservations expired. Invoked by the
    /// background sweep and exposed for on-demand runs.
    pub async fn expire_overdue(&self) -> DomainResult<usize> {
        let overdue = self.repos.reservations().find_overdue().await?;

        if overdue.is_empty() {
            return Ok(0);
        }

        info!(count = overdue.len(), "Expiring overdue reservations");

        let mut expired = 0;
        for mut reservation in overdue {
            reservation.expire();
            let event = ReservationExpiredEvent {
                reservation_id: reservation.id,
                user_id: reservation.user_id,
                station_id: reservation.station_id,
                timestamp: Utc::now(),
            };
            self.repos.reservations().update(reservation).await?;
            self.event_bus.publish(Event::ReservationExpired(event));
            expired += 1;
        }

        Ok(expired)
    }

    async fn require(&self, id: Uuid) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::inventory::StationInventory;
    use crate::domain::reservation::ReservationStatus;
    use crate::notifications::create_event_bus;
    use chrono::Duration;

    fn service(repos: Arc<InMemoryRepos>) -> ReservationService {
        ReservationService::new(repos, create_event_bus())
    }

    fn seed_inventory(repos: &InMemoryRepos, available: i32) -> (Uuid, Uuid) {
        let station_id = Uuid::new_v4();
        let type_id = Uuid::new_v4();
        let mut row = StationInventory::new(station_id, type_id, 5);
        row.available_units = available;
        repos.inventory.lock().unwrap().push(row);
        (station_id, type_id)
    }

    #[tokio::test]
    async fn create_reservation_holds_for_five_minutes() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed_inventory(&repos, 5);
        let svc = service(repos.clone());

        let user_id = Uuid::new_v4();
        let r = svc
            .create_reservation(user_id, station_id, type_id)
            .await
            .unwrap();
        assert!(r.is_active());
        // the hold is advisory: inventory is untouched
        assert_eq!(repos.available_units(station_id, type_id), Some(5));
    }

    #[tokio::test]
    async fn second_active_reservation_rejected_regardless_of_target() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_a, type_a) = seed_inventory(&repos, 5);
        let (station_b, type_b) = seed_inventory(&repos, 5);
        let svc = service(repos.clone());

        let user_id = Uuid::new_v4();
        svc.create_reservation(user_id, station_a, type_a)
            .await
            .unwrap();

        // different station and type, same user
        let err = svc
            .create_reservation(user_id, station_b, type_b)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateActiveReservation));
    }

    #[tokio::test]
    async fn out_of_stock_rejected() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed_inventory(&repos, 0);
        let svc = service(repos.clone());

        let err = svc
            .create_reservation(Uuid::new_v4(), station_id, type_id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::OutOfStock));
    }

    #[tokio::test]
    async fn missing_inventory_row_is_out_of_stock() {
        let repos = Arc::new(InMemoryRepos::new());
        let svc = service(repos.clone());

        let err = svc
            .create_reservation(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::OutOfStock));
    }

    #[tokio::test]
    async fn sweep_expires_overdue_and_frees_the_user() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed_inventory(&repos, 5);
        let svc = service(repos.clone());

        let user_id = Uuid::new_v4();
        let r = svc
            .create_reservation(user_id, station_id, type_id)
            .await
            .unwrap();

        // push the deadline into the past (T+5min+1s)
        {
            let mut rows = repos.reservations.lock().unwrap();
            rows[0].expires_at = Utc::now() - Duration::seconds(1);
        }

        let expired = svc.expire_overdue().await.unwrap();
        assert_eq!(expired, 1);

        let stored = repos.reservations.lock().unwrap()[0].clone();
        assert_eq!(stored.id, r.id);
        assert_eq!(stored.status, ReservationStatus::Expired);

        // the user can reserve again now
        svc.create_reservation(user_id, station_id, type_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn sweep_ignores_live_holds() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed_inventory(&repos, 5);
        let svc = service(repos.clone());

        svc.create_reservation(Uuid::new_v4(), station_id, type_id)
            .await
            .unwrap();

        assert_eq!(svc.expire_overdue().await.unwrap(), 0);
        assert_eq!(svc.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn cancel_uses_expired_status() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed_inventory(&repos, 5);
        let svc = service(repos.clone());

        let r = svc
            .create_reservation(Uuid::new_v4(), station_id, type_id)
            .await
            .unwrap();
        let cancelled = svc.cancel_reservation(r.id).await.unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Expired);
    }

    #[tokio::test]
    async fn complete_marks_completed() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed_inventory(&repos, 5);
        let svc = service(repos.clone());

        let r = svc
            .create_reservation(Uuid::new_v4(), station_id, type_id)
            .await
            .unwrap();
        let completed = svc.complete_reservation(r.id).await.unwrap();
        assert_eq!(completed.status, ReservationStatus::Completed);
    }
}
