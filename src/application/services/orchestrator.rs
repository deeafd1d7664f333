//! Booking/rental orchestration
//!
//! Turns a pending booking into a confirmed rental + transaction +
//! inventory decrement, with hand-ordered compensation on partial
//! failure, and handles the return/extension/cancellation flows.
//!
//! The store offers no multi-row transactions, so the confirmation is a
//! sequence of independent writes; every step after the first carries a
//! compensating action that restores the pre-call state as closely as
//! possible. The conditional inventory decrement is the only guard
//! against two confirmations spending the last unit.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::booking::{Booking, PaymentMethod};
use crate::domain::pricing::PricingRequest;
use crate::domain::rental::{
    ExtensionUnit, Rental, RentalDetails, RentalType, DUPLICATE_WINDOW_MINUTES,
};
use crate::domain::transaction::Transaction;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::events::{PaymentConfirmedEvent, ReturnConfirmedEvent};
use crate::notifications::{Event, SharedEventBus};

use super::pricing::PricingService;

/// Orchestrates the booking → rental lifecycle
pub struct RentalOrchestrator {
    repos: Arc<dyn RepositoryProvider>,
    pricing: Arc<PricingService>,
    event_bus: SharedEventBus,
    /// Per-booking re-entrancy guard; entries live only for the
    /// duration of one confirmation attempt in this process. The stored
    /// booking status is the cross-process backstop.
    confirmations_in_flight: DashMap<Uuid, ()>,
}

impl RentalOrchestrator {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        pricing: Arc<PricingService>,
        event_bus: SharedEventBus,
    ) -> Self {
        Self {
            repos,
            pricing,
            event_bus,
            confirmations_in_flight: DashMap::new(),
        }
    }

    /// Confirm a booking's payment: flip it to confirmed, create the
    /// rental and transaction, then decrement inventory.
    ///
    /// `return_time` overrides the default one-day rental period.
    ///
    /// On success booking/rental/transaction/inventory are mutually
    /// consistent. On failure the partial writes are compensated in
    /// reverse order and the original error is re-raised; compensation
    /// failures are logged but never mask it.
    pub async fn confirm_payment(
        &self,
        booking_id: Uuid,
        return_time: Option<chrono::DateTime<Utc>>,
    ) -> DomainResult<Rental> {
        if self
            .confirmations_in_flight
            .insert(booking_id, ())
            .is_some()
        {
            return Err(DomainError::AlreadyConfirmed);
        }

        let result = self.confirm_payment_inner(booking_id, return_time).await;
        self.confirmations_in_flight.remove(&booking_id);
        result
    }

    async fn confirm_payment_inner(
        &self,
        booking_id: Uuid,
        return_time: Option<chrono::DateTime<Utc>>,
    ) -> DomainResult<Rental> {
        let mut booking = self
            .repos
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "id",
                value: booking_id.to_string(),
            })?;

        if booking.is_confirmed() {
            return Err(DomainError::AlreadyConfirmed);
        }

        if self
            .repos
            .rentals()
            .find_by_booking_id(booking_id)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateRental(
                "a rental for this booking already exists".to_string(),
            ));
        }

        let window_start = Utc::now() - Duration::minutes(DUPLICATE_WINDOW_MINUTES);
        if self
            .repos
            .rentals()
            .find_recent_active(
                booking.user_id,
                booking.station_id,
                booking.power_bank_type_id,
                window_start,
            )
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateRental(
                "a recent active rental for this user, station and power bank type already exists"
                    .to_string(),
            ));
        }

        // Step 1: booking -> confirmed
        booking.confirm();
        self.repos.bookings().update(booking.clone()).await?;

        // Step 2: rental
        let rental = Rental::from_confirmed_booking(&booking, return_time);
        if let Err(e) = self.repos.rentals().save(rental.clone()).await {
            self.revert_booking(&booking).await;
            return Err(e);
        }

        // Step 3: transaction
        let transaction = Transaction::completed(
            rental.id,
            booking.total_amount,
            PaymentMethod::BankTransfer,
            booking.order_id.clone(),
        );
        if let Err(e) = self.repos.transactions().save(transaction.clone()).await {
            self.delete_rental(rental.id).await;
            self.revert_booking(&booking).await;
            return Err(e);
        }

        // Step 4: conditional inventory decrement
        if let Err(e) = self.allocate_unit(&booking).await {
            self.delete_transaction(transaction.id).await;
            self.delete_rental(rental.id).await;
            self.revert_booking(&booking).await;
            return Err(e);
        }

        info!(
            booking_id = %booking.id,
            rental_id = %rental.id,
            order_id = %booking.order_id,
            "Payment confirmed, rental created"
        );

        self.event_bus
            .publish(Event::PaymentConfirmed(PaymentConfirmedEvent {
                booking_id: booking.id,
                rental_id: rental.id,
                user_id: booking.user_id,
                total_amount: booking.total_amount,
                end_time: rental.end_time,
                timestamp: Utc::now(),
            }));

        Ok(rental)
    }

    /// Read the inventory row, then decrement it conditionally on the
    /// value just read.
    async fn allocate_unit(&self, booking: &Booking) -> DomainResult<()> {
        let row = self
            .repos
            .inventory()
            .find_by_station_and_type(booking.station_id, booking.power_bank_type_id)
            .await?;

        let Some(row) = row else {
            return Err(DomainError::InventoryUpdateFailed(
                "no inventory row for this station and power bank type".to_string(),
            ));
        };

        if row.available_units < 1 {
            return Err(DomainError::InventoryUpdateFailed(
                "insufficient inventory: no power banks available for this type".to_string(),
            ));
        }

        let applied = self
            .repos
            .inventory()
            .decrement_available(
                booking.station_id,
                booking.power_bank_type_id,
                row.available_units,
            )
            .await?;

        if !applied {
            // Someone else spent the unit between the read and the write
            return Err(DomainError::InventoryConflict);
        }

        Ok(())
    }

    /// Confirm a customer return: requires an active rental, sets it to
    /// completed with `end_time = now`, and notifies the customer.
    ///
    /// Inventory is deliberately untouched; counters only recover
    /// through a physical return to a station or the reconciliation
    /// sweep.
    pub async fn confirm_return(&self, rental_id: Uuid) -> DomainResult<Rental> {
        let details = self.require_details(rental_id).await?;

        if !details.rental.is_active() {
            return Err(DomainError::InvalidState(format!(
                "cannot confirm return for rental with status: {}",
                details.rental.status
            )));
        }

        self.complete_rental(details, false).await
    }

    /// Force-return a rental without any precondition check on its
    /// current status. Behaviourally identical to a confirmed return
    /// apart from the notification wording.
    pub async fn force_return(&self, rental_id: Uuid) -> DomainResult<Rental> {
        let details = self.require_details(rental_id).await?;
        self.complete_rental(details, true).await
    }

    async fn complete_rental(
        &self,
        details: RentalDetails,
        forced: bool,
    ) -> DomainResult<Rental> {
        let mut rental = details.rental;
        rental.complete(Utc::now());
        self.repos.rentals().update(rental.clone()).await?;

        info!(rental_id = %rental.id, forced, "Return confirmed");

        // Best-effort customer notification; never rolls back the update
        self.event_bus
            .publish(Event::ReturnConfirmed(ReturnConfirmedEvent {
                rental_id: rental.id,
                user_id: rental.user_id,
                station_name: details.station_name,
                power_bank_type_name: details.power_bank_type_name,
                forced,
                timestamp: Utc::now(),
            }));

        Ok(rental)
    }

    /// Push a rental's end time out by `amount` hours or days. No upper
    /// bound is enforced and no re-pricing happens.
    pub async fn extend_rental(
        &self,
        rental_id: Uuid,
        amount: i64,
        unit: ExtensionUnit,
    ) -> DomainResult<Rental> {
        let mut rental = self.require_rental(rental_id).await?;

        if rental.extend(amount, unit).is_none() {
            return Err(DomainError::InvalidState(
                "rental has no end time to extend".to_string(),
            ));
        }

        self.repos.rentals().update(rental.clone()).await?;

        info!(
            rental_id = %rental_id,
            amount,
            unit = unit.as_str(),
            new_end = ?rental.end_time,
            "Rental extended"
        );

        Ok(rental)
    }

    /// Cancel a rental: a direct status write with `end_time = now`.
    /// Releases no inventory and no reservation.
    pub async fn cancel_rental(&self, rental_id: Uuid) -> DomainResult<Rental> {
        let mut rental = self.require_rental(rental_id).await?;
        rental.cancel(Utc::now());
        self.repos.rentals().update(rental.clone()).await?;

        info!(rental_id = %rental_id, "Rental cancelled");
        Ok(rental)
    }

    /// Customer-initiated rental: quote the price, then insert the
    /// rental row. A future start time schedules an advance booking.
    pub async fn start_rental(
        &self,
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        rental_duration_hours: i32,
        rental_type: RentalType,
        scheduled_start_time: Option<chrono::DateTime<Utc>>,
    ) -> DomainResult<Rental> {
        let pricing = self
            .pricing
            .quote(&PricingRequest {
                power_bank_type_id,
                rental_duration_hours,
                rental_type: rental_type.clone(),
                scheduled_start_time,
                user_id: Some(user_id),
            })
            .await?;

        let rental = Rental::priced(
            user_id,
            station_id,
            power_bank_type_id,
            rental_duration_hours,
            rental_type,
            &pricing,
            scheduled_start_time,
        );
        self.repos.rentals().save(rental.clone()).await?;

        info!(
            rental_id = %rental.id,
            scheduled = rental.scheduled_start_time.is_some(),
            total = rental.total_amount,
            "Rental started"
        );

        Ok(rental)
    }

    /// List all rentals, newest first
    pub async fn list(&self) -> DomainResult<Vec<Rental>> {
        self.repos.rentals().find_all().await
    }

    /// Fetch one rental
    pub async fn get(&self, rental_id: Uuid) -> DomainResult<Rental> {
        self.require_rental(rental_id).await
    }

    // ── Compensation helpers ────────────────────────────────────
    //
    // Failures here are logged and swallowed so the original error
    // keeps propagating.

    async fn revert_booking(&self, booking: &Booking) {
        let mut reverted = booking.clone();
        reverted.revert_to_pending();
        if let Err(e) = self.repos.bookings().update(reverted).await {
            error!(booking_id = %booking.id, error = %e, "Compensation failed: booking not reverted");
        }
    }

    async fn delete_rental(&self, rental_id: Uuid) {
        if let Err(e) = self.repos.rentals().delete(rental_id).await {
            error!(rental_id = %rental_id, error = %e, "Compensation failed: rental not deleted");
        }
    }

    async fn delete_transaction(&self, transaction_id: Uuid) {
        if let Err(e) = self.repos.transactions().delete(transaction_id).await {
            error!(
                transaction_id = %transaction_id,
                error = %e,
                "Compensation failed: transaction not deleted"
            );
        }
    }

    async fn require_rental(&self, rental_id: Uuid) -> DomainResult<Rental> {
        self.repos
            .rentals()
            .find_by_id(rental_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Rental",
                field: "id",
                value: rental_id.to_string(),
            })
    }

    async fn require_details(&self, rental_id: Uuid) -> DomainResult<RentalDetails> {
        let details = self.repos.rentals().find_detailed(rental_id).await?;
        match details {
            Some(d) => Ok(d),
            None => {
                warn!(rental_id = %rental_id, "Rental not found");
                Err(DomainError::NotFound {
                    entity: "Rental",
                    field: "id",
                    value: rental_id.to_string(),
                })
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::booking::BookingStatus;
    use crate::domain::inventory::StationInventory;
    use crate::domain::power_bank::PowerBankType;
    use crate::domain::rental::RentalStatus;
    use crate::domain::station::Station;
    use crate::notifications::create_event_bus;
    use chrono::TimeZone;
    use std::sync::atomic::Ordering;

    struct Fixture {
        repos: Arc<InMemoryRepos>,
        orchestrator: RentalOrchestrator,
        station_id: Uuid,
        type_id: Uuid,
    }

    fn fixture(available_units: i32) -> Fixture {
        let repos = Arc::new(InMemoryRepos::new());

        let station = Station::new("Mall Kiosk", "12 Market Road", 10, 5_000);
        let station_id = station.id;
        repos.stations.lock().unwrap().push(station);

        let t = PowerBankType::from_daily_rate("PowerMax 10K", 10_000, 480_000);
        let type_id = t.id;
        repos.power_bank_types.lock().unwrap().push(t);

        let mut row = StationInventory::new(station_id, type_id, 5);
        row.available_units = available_units;
        repos.inventory.lock().unwrap().push(row);

        let provider: Arc<dyn RepositoryProvider> = repos.clone();
        let pricing = Arc::new(PricingService::new(provider.clone()));
        let orchestrator = RentalOrchestrator::new(provider, pricing, create_event_bus());

        Fixture {
            repos,
            orchestrator,
            station_id,
            type_id,
        }
    }

    fn seed_booking(f: &Fixture, user_id: Uuid) -> Booking {
        let booking = Booking::new(
            user_id,
            f.station_id,
            f.type_id,
            480_000,
            PaymentMethod::BankTransfer,
        );
        f.repos.bookings.lock().unwrap().push(booking.clone());
        booking
    }

    #[tokio::test]
    async fn confirm_payment_creates_rental_transaction_and_decrements() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());

        let rental = f.orchestrator.confirm_payment(booking.id, None).await.unwrap();

        assert_eq!(rental.status, RentalStatus::Active);
        assert_eq!(rental.booking_id, Some(booking.id));
        assert_eq!(rental.total_amount, 480_000);

        let stored_booking = f.repos.bookings.lock().unwrap()[0].clone();
        assert_eq!(stored_booking.status, BookingStatus::Confirmed);

        let txs = f.repos.transactions.lock().unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].rental_id, rental.id);
        assert_eq!(txs[0].payment_reference.as_deref(), Some(booking.order_id.as_str()));

        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(4));
    }

    #[tokio::test]
    async fn confirm_payment_honours_requested_return_time() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());

        let return_time = Utc::now() + Duration::hours(8);
        let rental = f
            .orchestrator
            .confirm_payment(booking.id, Some(return_time))
            .await
            .unwrap();
        assert_eq!(rental.end_time, Some(return_time));
    }

    #[tokio::test]
    async fn second_confirmation_rejected_and_nothing_double_spent() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());

        f.orchestrator.confirm_payment(booking.id, None).await.unwrap();
        let err = f
            .orchestrator
            .confirm_payment(booking.id, None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::AlreadyConfirmed | DomainError::DuplicateRental(_)
        ));
        assert_eq!(f.repos.rentals.lock().unwrap().len(), 1);
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(4));
    }

    #[tokio::test]
    async fn recent_active_rental_for_same_target_blocks_confirmation() {
        let f = fixture(5);
        let user_id = Uuid::new_v4();
        let first = seed_booking(&f, user_id);
        let second = seed_booking(&f, user_id);

        f.orchestrator.confirm_payment(first.id, None).await.unwrap();
        let err = f
            .orchestrator
            .confirm_payment(second.id, None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateRental(_)));
        let stored = f.repos.bookings.lock().unwrap();
        let second_stored = stored.iter().find(|b| b.id == second.id).unwrap();
        assert_eq!(second_stored.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn transaction_failure_compensates_rental_and_booking() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());

        f.repos.fail_transaction_save.store(true, Ordering::SeqCst);
        let err = f
            .orchestrator
            .confirm_payment(booking.id, None)
            .await
            .unwrap_err();
        f.repos.fail_transaction_save.store(false, Ordering::SeqCst);

        assert!(matches!(err, DomainError::Validation(_)));
        // rental created in the same call must not survive
        assert!(f.repos.rentals.lock().unwrap().is_empty());
        assert!(f.repos.transactions.lock().unwrap().is_empty());
        // booking back to pending
        let stored_booking = f.repos.bookings.lock().unwrap()[0].clone();
        assert_eq!(stored_booking.status, BookingStatus::Pending);
        // inventory untouched
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(5));
    }

    #[tokio::test]
    async fn out_of_stock_confirmation_rolls_everything_back() {
        let f = fixture(0);
        let booking = seed_booking(&f, Uuid::new_v4());

        let err = f
            .orchestrator
            .confirm_payment(booking.id, None)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InventoryUpdateFailed(_)));
        assert!(f.repos.rentals.lock().unwrap().is_empty());
        assert!(f.repos.transactions.lock().unwrap().is_empty());
        let stored_booking = f.repos.bookings.lock().unwrap()[0].clone();
        assert_eq!(stored_booking.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn stale_decrement_precondition_is_a_conflict() {
        let f = fixture(4);
        // expected value no longer matches the row
        let applied = f
            .repos
            .inventory()
            .decrement_available(f.station_id, f.type_id, 5)
            .await
            .unwrap();
        assert!(!applied);
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(4));
    }

    #[tokio::test]
    async fn race_for_last_unit_lets_exactly_one_win() {
        let f = fixture(1);
        let booking_a = seed_booking(&f, Uuid::new_v4());
        let booking_b = seed_booking(&f, Uuid::new_v4());

        let (ra, rb) = tokio::join!(
            f.orchestrator.confirm_payment(booking_a.id, None),
            f.orchestrator.confirm_payment(booking_b.id, None),
        );

        let outcomes = [ra, rb];
        let winners = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);

        let loser_err = outcomes.iter().find(|r| r.is_err()).unwrap();
        assert!(matches!(
            loser_err.as_ref().unwrap_err(),
            DomainError::InventoryConflict | DomainError::InventoryUpdateFailed(_)
        ));

        // exactly one rental + transaction exist, unit spent once
        assert_eq!(f.repos.rentals.lock().unwrap().len(), 1);
        assert_eq!(f.repos.transactions.lock().unwrap().len(), 1);
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(0));

        // the losing booking reverted to pending
        let bookings = f.repos.bookings.lock().unwrap();
        let confirmed = bookings.iter().filter(|b| b.is_confirmed()).count();
        assert_eq!(confirmed, 1);
    }

    #[tokio::test]
    async fn confirm_return_completes_without_restocking() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());
        let rental = f.orchestrator.confirm_payment(booking.id, None).await.unwrap();
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(4));

        let returned = f.orchestrator.confirm_return(rental.id).await.unwrap();
        assert_eq!(returned.status, RentalStatus::Completed);
        assert!(returned.end_time.is_some());

        // return does not restock
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(4));
    }

    #[tokio::test]
    async fn confirm_return_requires_active_status() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());
        let rental = f.orchestrator.confirm_payment(booking.id, None).await.unwrap();

        f.orchestrator.confirm_return(rental.id).await.unwrap();
        let err = f.orchestrator.confirm_return(rental.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[tokio::test]
    async fn force_return_skips_the_status_check() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());
        let rental = f.orchestrator.confirm_payment(booking.id, None).await.unwrap();

        f.orchestrator.confirm_return(rental.id).await.unwrap();
        // already completed, but force return still succeeds
        let forced = f.orchestrator.force_return(rental.id).await.unwrap();
        assert_eq!(forced.status, RentalStatus::Completed);
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(4));
    }

    #[tokio::test]
    async fn return_of_unknown_rental_is_not_found() {
        let f = fixture(5);
        let err = f.orchestrator.confirm_return(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Rental", .. }));
    }

    #[tokio::test]
    async fn extend_rental_adds_days_to_end_time() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());
        let rental = f.orchestrator.confirm_payment(booking.id, None).await.unwrap();

        // pin the end time, then extend by two days
        {
            let mut rows = f.repos.rentals.lock().unwrap();
            rows[0].end_time = Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        }

        let extended = f
            .orchestrator
            .extend_rental(rental.id, 2, ExtensionUnit::Days)
            .await
            .unwrap();
        assert_eq!(
            extended.end_time,
            Some(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn cancel_rental_releases_nothing() {
        let f = fixture(5);
        let booking = seed_booking(&f, Uuid::new_v4());
        let rental = f.orchestrator.confirm_payment(booking.id, None).await.unwrap();

        let cancelled = f.orchestrator.cancel_rental(rental.id).await.unwrap();
        assert_eq!(cancelled.status, RentalStatus::Cancelled);
        assert!(cancelled.end_time.is_some());
        // no compensating inventory release is modelled
        assert_eq!(f.repos.available_units(f.station_id, f.type_id), Some(4));
    }

    #[tokio::test]
    async fn start_rental_persists_pricing_snapshot() {
        let f = fixture(5);

        let rental = f
            .orchestrator
            .start_rental(
                Uuid::new_v4(),
                f.station_id,
                f.type_id,
                2,
                RentalType::Hourly,
                None,
            )
            .await
            .unwrap();

        assert_eq!(rental.status, RentalStatus::Active);
        assert_eq!(rental.base_price, 40_000);
        assert!(rental.total_amount >= rental.base_price);
        assert_eq!(f.repos.rentals.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn scheduled_start_creates_advance_booking() {
        let f = fixture(5);
        let start = Utc::now() + Duration::hours(6);

        let rental = f
            .orchestrator
            .start_rental(
                Uuid::new_v4(),
                f.station_id,
                f.type_id,
                24,
                RentalType::Daily,
                Some(start),
            )
            .await
            .unwrap();

        assert_eq!(rental.status, RentalStatus::Scheduled);
        assert_eq!(
            rental.cancellation_deadline,
            Some(start - Duration::hours(1))
        );
    }
}
