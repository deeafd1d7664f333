//! User loyalty repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::UserLoyalty;
use crate::domain::DomainResult;

#[async_trait]
pub trait LoyaltyRepository: Send + Sync {
    /// Save a new loyalty record
    async fn save(&self, loyalty: UserLoyalty) -> DomainResult<()>;

    /// Find the loyalty record for a user
    async fn find_by_user(&self, user_id: Uuid) -> DomainResult<Option<UserLoyalty>>;

    /// Update an existing loyalty record
    async fn update(&self, loyalty: UserLoyalty) -> DomainResult<()>;
}
