//! Rental repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::{Rental, RentalDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Save a new rental
    async fn save(&self, rental: Rental) -> DomainResult<()>;

    /// Find rental by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Rental>>;

    /// Find rental joined with station and power-bank-type names
    async fn find_detailed(&self, id: Uuid) -> DomainResult<Option<RentalDetails>>;

    /// Find the rental created from a booking, if any
    async fn find_by_booking_id(&self, booking_id: Uuid) -> DomainResult<Option<Rental>>;

    /// Find all rentals, newest first
    async fn find_all(&self) -> DomainResult<Vec<Rental>>;

    /// Find all active rentals
    async fn find_active(&self) -> DomainResult<Vec<Rental>>;

    /// Find an active rental for the same (user, station, type) created
    /// at or after `since` (the duplicate-confirmation guard)
    async fn find_recent_active(
        &self,
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        since: DateTime<Utc>,
    ) -> DomainResult<Option<Rental>>;

    /// Update an existing rental
    async fn update(&self, rental: Rental) -> DomainResult<()>;

    /// Delete a rental (compensation only)
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
