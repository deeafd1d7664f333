//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use crate::shared::errors::DomainError;

use super::booking::BookingRepository;
use super::inventory::InventoryRepository;
use super::loyalty::LoyaltyRepository;
use super::power_bank::PowerBankTypeRepository;
use super::rental::RentalRepository;
use super::reservation::ReservationRepository;
use super::station::StationRepository;
use super::transaction::TransactionRepository;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let station = repos.stations().find_by_id(station_id).await?;
///     let row = repos.inventory().find_by_station_and_type(station_id, type_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn stations(&self) -> &dyn StationRepository;
    fn power_bank_types(&self) -> &dyn PowerBankTypeRepository;
    fn inventory(&self) -> &dyn InventoryRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn rentals(&self) -> &dyn RentalRepository;
    fn transactions(&self) -> &dyn TransactionRepository;
    fn loyalty(&self) -> &dyn LoyaltyRepository;
}
