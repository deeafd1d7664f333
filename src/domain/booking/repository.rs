//! Booking repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Save a new booking
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>>;

    /// Find booking by its human-readable order id
    async fn find_by_order_id(&self, order_id: &str) -> DomainResult<Option<Booking>>;

    /// Find all bookings, newest first
    async fn find_all(&self) -> DomainResult<Vec<Booking>>;

    /// Update an existing booking
    async fn update(&self, booking: Booking) -> DomainResult<()>;
}
