//! Station repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Station;
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Save a new station
    async fn save(&self, station: Station) -> DomainResult<()>;

    /// Find station by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Station>>;

    /// Find all stations
    async fn find_all(&self) -> DomainResult<Vec<Station>>;

    /// Update an existing station
    async fn update(&self, station: Station) -> DomainResult<()>;

    /// Delete a station by ID (hard delete)
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
