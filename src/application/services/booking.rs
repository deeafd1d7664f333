//! Booking service
//!
//! Customer-facing booking creation and the admin order-id lookup used
//! by the payment confirmation screen.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::booking::{Booking, PaymentMethod};
use crate::domain::loyalty::UserLoyalty;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::events::BookingCreatedEvent;
use crate::notifications::{Event, SharedEventBus};

/// Service for customer bookings
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    /// Create a pending booking for one day of the selected SKU.
    ///
    /// Generates the human-readable order id the customer quotes as
    /// their transfer reference, and notifies admins.
    pub async fn create_booking(
        &self,
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        payment_method: PaymentMethod,
    ) -> DomainResult<Booking> {
        let station = self
            .repos
            .stations()
            .find_by_id(station_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Station",
                field: "id",
                value: station_id.to_string(),
            })?;

        let power_bank_type = self
            .repos
            .power_bank_types()
            .find_by_id(power_bank_type_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "PowerBankType",
                field: "id",
                value: power_bank_type_id.to_string(),
            })?;

        let booking = Booking::new(
            user_id,
            station.id,
            power_bank_type.id,
            power_bank_type.price_per_day,
            payment_method,
        );
        self.repos.bookings().save(booking.clone()).await?;

        // First booking seeds the loyalty record the pricing reads
        if self.repos.loyalty().find_by_user(user_id).await?.is_none() {
            self.repos.loyalty().save(UserLoyalty::new(user_id)).await?;
        }

        info!(
            booking_id = %booking.id,
            order_id = %booking.order_id,
            station = %station.name,
            "Booking created"
        );

        self.event_bus
            .publish(Event::BookingCreated(BookingCreatedEvent {
                booking_id: booking.id,
                order_id: booking.order_id.clone(),
                user_id,
                station_id,
                total_amount: booking.total_amount,
                timestamp: Utc::now(),
            }));

        Ok(booking)
    }

    /// Look up a booking by its order id (admin search)
    pub async fn find_by_order_id(&self, order_id: &str) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_order_id(order_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "order_id",
                value: order_id.to_string(),
            })
    }

    /// List all bookings, newest first
    pub async fn list(&self) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_all().await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::booking::BookingStatus;
    use crate::domain::power_bank::PowerBankType;
    use crate::domain::station::Station;
    use crate::notifications::create_event_bus;

    fn seed(repos: &InMemoryRepos) -> (Uuid, Uuid) {
        let station = Station::new("Mall Kiosk", "12 Market Road", 10, 5_000);
        let station_id = station.id;
        repos.stations.lock().unwrap().push(station);

        let t = PowerBankType::from_daily_rate("PowerMax 10K", 10_000, 480_000);
        let type_id = t.id;
        repos.power_bank_types.lock().unwrap().push(t);

        (station_id, type_id)
    }

    #[tokio::test]
    async fn create_booking_is_pending_with_daily_amount() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed(&repos);
        let svc = BookingService::new(repos.clone(), create_event_bus());

        let booking = svc
            .create_booking(
                Uuid::new_v4(),
                station_id,
                type_id,
                PaymentMethod::BankTransfer,
            )
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_amount, 480_000);
        assert!(booking.order_id.starts_with("BK-"));
    }

    #[tokio::test]
    async fn first_booking_seeds_loyalty_record() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed(&repos);
        let svc = BookingService::new(repos.clone(), create_event_bus());

        let user_id = Uuid::new_v4();
        svc.create_booking(user_id, station_id, type_id, PaymentMethod::Card)
            .await
            .unwrap();
        svc.create_booking(user_id, station_id, type_id, PaymentMethod::Card)
            .await
            .unwrap();

        let loyalty = repos.loyalty.lock().unwrap();
        assert_eq!(loyalty.iter().filter(|l| l.user_id == user_id).count(), 1);
    }

    #[tokio::test]
    async fn unknown_station_rejected() {
        let repos = Arc::new(InMemoryRepos::new());
        let (_, type_id) = seed(&repos);
        let svc = BookingService::new(repos, create_event_bus());

        let err = svc
            .create_booking(
                Uuid::new_v4(),
                Uuid::new_v4(),
                type_id,
                PaymentMethod::Card,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Station", .. }));
    }

    #[tokio::test]
    async fn order_id_lookup_roundtrip() {
        let repos = Arc::new(InMemoryRepos::new());
        let (station_id, type_id) = seed(&repos);
        let svc = BookingService::new(repos, create_event_bus());

        let booking = svc
            .create_booking(
                Uuid::new_v4(),
                station_id,
                type_id,
                PaymentMethod::BankTransfer,
            )
            .await
            .unwrap();

        let found = svc.find_by_order_id(&booking.order_id).await.unwrap();
        assert_eq!(found.id, booking.id);

        let err = svc.find_by_order_id("BK-000000000").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
