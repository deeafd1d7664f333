//! In-memory repository fakes for service tests
//!
//! Backed by mutex-guarded vectors; the inventory decrement checks its
//! precondition under the lock, which reproduces the store's
//! conditional-update semantics. `fail_transaction_save` forces the
//! transaction-insert step to fail so compensation paths can be
//! exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::inventory::{InventoryRepository, StationInventory};
use crate::domain::loyalty::{LoyaltyRepository, UserLoyalty};
use crate::domain::power_bank::{PowerBankType, PowerBankTypeRepository};
use crate::domain::rental::{Rental, RentalDetails, RentalRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::{Reservation, ReservationRepository};
use crate::domain::station::{Station, StationRepository};
use crate::domain::transaction::{Transaction, TransactionRepository};
use crate::domain::{DomainError, DomainResult};

#[derive(Default)]
pub struct InMemoryRepos {
    pub stations: Mutex<Vec<Station>>,
    pub power_bank_types: Mutex<Vec<PowerBankType>>,
    pub inventory: Mutex<Vec<StationInventory>>,
    pub reservations: Mutex<Vec<Reservation>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub rentals: Mutex<Vec<Rental>>,
    pub transactions: Mutex<Vec<Transaction>>,
    pub loyalty: Mutex<Vec<UserLoyalty>>,
    /// When set, the next transaction save fails
    pub fail_transaction_save: AtomicBool,
}

impl InMemoryRepos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available_units(&self, station_id: Uuid, power_bank_type_id: Uuid) -> Option<i32> {
        self.inventory
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.station_id == station_id && i.power_bank_type_id == power_bank_type_id)
            .map(|i| i.available_units)
    }
}

fn missing(entity: &'static str, id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity,
        field: "id",
        value: id.to_string(),
    }
}

#[async_trait]
impl StationRepository for InMemoryRepos {
    async fn save(&self, station: Station) -> DomainResult<()> {
        self.stations.lock().unwrap().push(station);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Station>> {
        Ok(self
            .stations
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        Ok(self.stations.lock().unwrap().clone())
    }

    async fn update(&self, station: Station) -> DomainResult<()> {
        let mut rows = self.stations.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == station.id)
            .ok_or_else(|| missing("Station", station.id))?;
        *row = station;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.stations.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(missing("Station", id));
        }
        Ok(())
    }
}

#[async_trait]
impl PowerBankTypeRepository for InMemoryRepos {
    async fn save(&self, t: PowerBankType) -> DomainResult<()> {
        self.power_bank_types.lock().unwrap().push(t);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<PowerBankType>> {
        Ok(self
            .power_bank_types
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<PowerBankType>> {
        Ok(self.power_bank_types.lock().unwrap().clone())
    }

    async fn update(&self, t: PowerBankType) -> DomainResult<()> {
        let mut rows = self.power_bank_types.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|x| x.id == t.id)
            .ok_or_else(|| missing("PowerBankType", t.id))?;
        *row = t;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.power_bank_types.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == before {
            return Err(missing("PowerBankType", id));
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryRepository for InMemoryRepos {
    async fn save(&self, inv: StationInventory) -> DomainResult<()> {
        self.inventory.lock().unwrap().push(inv);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<StationInventory>> {
        Ok(self
            .inventory
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<StationInventory>> {
        Ok(self.inventory.lock().unwrap().clone())
    }

    async fn find_for_station(&self, station_id: Uuid) -> DomainResult<Vec<StationInventory>> {
        Ok(self
            .inventory
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.station_id == station_id)
            .cloned()
            .collect())
    }

    async fn find_by_station_and_type(
        &self,
        station_id: Uuid,
        power_bank_type_id: Uuid,
    ) -> DomainResult<Option<StationInventory>> {
        Ok(self
            .inventory
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.station_id == station_id && i.power_bank_type_id == power_bank_type_id)
            .cloned())
    }

    async fn update(&self, inv: StationInventory) -> DomainResult<()> {
        let mut rows = self.inventory.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|i| i.id == inv.id)
            .ok_or_else(|| missing("StationInventory", inv.id))?;
        *row = inv;
        Ok(())
    }

    async fn decrement_available(
        &self,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        expected_available: i32,
    ) -> DomainResult<bool> {
        // Precondition checked under the lock, like the store's
        // conditional UPDATE.
        let mut rows = self.inventory.lock().unwrap();
        let Some(row) = rows
            .iter_mut()
            .find(|i| i.station_id == station_id && i.power_bank_type_id == power_bank_type_id)
        else {
            return Ok(false);
        };
        if row.available_units != expected_available {
            return Ok(false);
        }
        row.available_units -= 1;
        row.updated_at = Utc::now();
        Ok(true)
    }

    async fn set_available(&self, id: Uuid, available_units: i32) -> DomainResult<()> {
        let mut rows = self.inventory.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| missing("StationInventory", id))?;
        row.available_units = available_units;
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_for_station(&self, station_id: Uuid) -> DomainResult<()> {
        self.inventory
            .lock()
            .unwrap()
            .retain(|i| i.station_id != station_id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryRepos {
    async fn save(&self, reservation: Reservation) -> DomainResult<()> {
        self.reservations.lock().unwrap().push(reservation);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn update(&self, reservation: Reservation) -> DomainResult<()> {
        let mut rows = self.reservations.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == reservation.id)
            .ok_or_else(|| missing("Reservation", reservation.id))?;
        *row = reservation;
        Ok(())
    }

    async fn find_active_for_user(&self, user_id: Uuid) -> DomainResult<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.is_active())
            .cloned())
    }

    async fn find_active(&self) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        Ok(self.reservations.lock().unwrap().clone())
    }

    async fn find_overdue(&self) -> DomainResult<Vec<Reservation>> {
        let now = Utc::now();
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_active() && r.is_overdue(now))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookingRepository for InMemoryRepos {
    async fn save(&self, booking: Booking) -> DomainResult<()> {
        self.bookings.lock().unwrap().push(booking);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn find_by_order_id(&self, order_id: &str) -> DomainResult<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.order_id == order_id)
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn update(&self, booking: Booking) -> DomainResult<()> {
        let mut rows = self.bookings.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| missing("Booking", booking.id))?;
        *row = booking;
        Ok(())
    }
}

#[async_trait]
impl RentalRepository for InMemoryRepos {
    async fn save(&self, rental: Rental) -> DomainResult<()> {
        self.rentals.lock().unwrap().push(rental);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_detailed(&self, id: Uuid) -> DomainResult<Option<RentalDetails>> {
        let Some(rental) = self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
        else {
            return Ok(None);
        };

        let station_name = self
            .stations
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == rental.station_id)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        let power_bank_type_name = self
            .power_bank_types
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == rental.power_bank_type_id)
            .map(|t| t.name.clone())
            .unwrap_or_default();

        Ok(Some(RentalDetails {
            rental,
            station_name,
            power_bank_type_name,
        }))
    }

    async fn find_by_booking_id(&self, booking_id: Uuid) -> DomainResult<Option<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.booking_id == Some(booking_id))
            .cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Rental>> {
        Ok(self.rentals.lock().unwrap().clone())
    }

    async fn find_active(&self) -> DomainResult<Vec<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_active())
            .cloned()
            .collect())
    }

    async fn find_recent_active(
        &self,
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        since: DateTime<Utc>,
    ) -> DomainResult<Option<Rental>> {
        Ok(self
            .rentals
            .lock()
            .unwrap()
            .iter()
            .find(|r| {
                r.user_id == user_id
                    && r.station_id == station_id
                    && r.power_bank_type_id == power_bank_type_id
                    && r.is_active()
                    && r.created_at >= since
            })
            .cloned())
    }

    async fn update(&self, rental: Rental) -> DomainResult<()> {
        let mut rows = self.rentals.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == rental.id)
            .ok_or_else(|| missing("Rental", rental.id))?;
        *row = rental;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.rentals.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(missing("Rental", id));
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for InMemoryRepos {
    async fn save(&self, transaction: Transaction) -> DomainResult<()> {
        if self.fail_transaction_save.load(Ordering::SeqCst) {
            return Err(DomainError::Validation(
                "Database error: transaction insert rejected".to_string(),
            ));
        }
        self.transactions.lock().unwrap().push(transaction);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Transaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_by_rental_id(&self, rental_id: Uuid) -> DomainResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.rental_id == rental_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Transaction>> {
        Ok(self.transactions.lock().unwrap().clone())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let mut rows = self.transactions.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == before {
            return Err(missing("Transaction", id));
        }
        Ok(())
    }
}

#[async_trait]
impl LoyaltyRepository for InMemoryRepos {
    async fn save(&self, loyalty: UserLoyalty) -> DomainResult<()> {
        self.loyalty.lock().unwrap().push(loyalty);
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Option<UserLoyalty>> {
        Ok(self
            .loyalty
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.user_id == user_id)
            .cloned())
    }

    async fn update(&self, loyalty: UserLoyalty) -> DomainResult<()> {
        let mut rows = self.loyalty.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|l| l.id == loyalty.id)
            .ok_or_else(|| missing("UserLoyalty", loyalty.id))?;
        *row = loyalty;
        Ok(())
    }
}

impl RepositoryProvider for InMemoryRepos {
    fn stations(&self) -> &dyn StationRepository {
        self
    }

    fn power_bank_types(&self) -> &dyn PowerBankTypeRepository {
        self
    }

    fn inventory(&self) -> &dyn InventoryRepository {
        self
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        self
    }

    fn bookings(&self) -> &dyn BookingRepository {
        self
    }

    fn rentals(&self) -> &dyn RentalRepository {
        self
    }

    fn transactions(&self) -> &dyn TransactionRepository {
        self
    }

    fn loyalty(&self) -> &dyn LoyaltyRepository {
        self
    }
}
