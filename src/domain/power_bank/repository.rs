//! Power-bank type repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::PowerBankType;
use crate::domain::DomainResult;

#[async_trait]
pub trait PowerBankTypeRepository: Send + Sync {
    /// Save a new power bank type
    async fn save(&self, power_bank_type: PowerBankType) -> DomainResult<()>;

    /// Find power bank type by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<PowerBankType>>;

    /// Find all power bank types, ordered by capacity
    async fn find_all(&self) -> DomainResult<Vec<PowerBankType>>;

    /// Update an existing power bank type
    async fn update(&self, power_bank_type: PowerBankType) -> DomainResult<()>;

    /// Delete a power bank type by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
