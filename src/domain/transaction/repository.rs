//! Transaction repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Transaction;
use crate::domain::DomainResult;

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Save a new transaction
    async fn save(&self, transaction: Transaction) -> DomainResult<()>;

    /// Find transaction by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Transaction>>;

    /// Find all transactions for a rental
    async fn find_by_rental_id(&self, rental_id: Uuid) -> DomainResult<Vec<Transaction>>;

    /// Find all transactions, newest first
    async fn find_all(&self) -> DomainResult<Vec<Transaction>>;

    /// Delete a transaction (compensation only)
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
