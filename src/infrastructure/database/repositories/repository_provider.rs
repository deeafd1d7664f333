//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::inventory::InventoryRepository;
use crate::domain::loyalty::LoyaltyRepository;
use crate::domain::power_bank::PowerBankTypeRepository;
use crate::domain::rental::RentalRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::station::StationRepository;
use crate::domain::transaction::TransactionRepository;

use super::booking_repository::SeaOrmBookingRepository;
use super::inventory_repository::SeaOrmInventoryRepository;
use super::loyalty_repository::SeaOrmLoyaltyRepository;
use super::power_bank_type_repository::SeaOrmPowerBankTypeRepository;
use super::rental_repository::SeaOrmRentalRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::station_repository::SeaOrmStationRepository;
use super::transaction_repository::SeaOrmTransactionRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let station = repos.stations().find_by_id(station_id).await?;
/// let row = repos.inventory().find_by_station_and_type(station_id, type_id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    stations: SeaOrmStationRepository,
    power_bank_types: SeaOrmPowerBankTypeRepository,
    inventory: SeaOrmInventoryRepository,
    reservations: SeaOrmReservationRepository,
    bookings: SeaOrmBookingRepository,
    rentals: SeaOrmRentalRepository,
    transactions: SeaOrmTransactionRepository,
    loyalty: SeaOrmLoyaltyRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            stations: SeaOrmStationRepository::new(db.clone()),
            power_bank_types: SeaOrmPowerBankTypeRepository::new(db.clone()),
            inventory: SeaOrmInventoryRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            rentals: SeaOrmRentalRepository::new(db.clone()),
            transactions: SeaOrmTransactionRepository::new(db.clone()),
            loyalty: SeaOrmLoyaltyRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn power_bank_types(&self) -> &dyn PowerBankTypeRepository {
        &self.power_bank_types
    }

    fn inventory(&self) -> &dyn InventoryRepository {
        &self.inventory
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn rentals(&self) -> &dyn RentalRepository {
        &self.rentals
    }

    fn transactions(&self) -> &dyn TransactionRepository {
        &self.transactions
    }

    fn loyalty(&self) -> &dyn LoyaltyRepository {
        &self.loyalty
    }
}
