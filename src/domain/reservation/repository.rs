//! Reservation repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Reservation;
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Save a new reservation
    async fn save(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>>;

    /// Update an existing reservation
    async fn update(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find the active reservation held by a user, if any
    async fn find_active_for_user(&self, user_id: Uuid) -> DomainResult<Option<Reservation>>;

    /// Find all active reservations, newest first
    async fn find_active(&self) -> DomainResult<Vec<Reservation>>;

    /// Find all reservations (any status), newest first
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Find active reservations whose deadline has passed
    async fn find_overdue(&self) -> DomainResult<Vec<Reservation>>;
}
