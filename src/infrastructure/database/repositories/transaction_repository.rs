//! SeaORM implementation of TransactionRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::booking::PaymentMethod;
use crate::domain::transaction::{Transaction, TransactionRepository, TransactionStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::transaction;

pub struct SeaOrmTransactionRepository {
    db: DatabaseConnection,
}

impl SeaOrmTransactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: transaction::Model) -> Transaction {
    Transaction {
        id: m.id,
        rental_id: m.rental_id,
        amount: m.amount,
        payment_method: PaymentMethod::from_str(&m.payment_method),
        payment_reference: m.payment_reference,
        status: TransactionStatus::from_str(&m.status),
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── TransactionRepository impl ──────────────────────────────────

#[async_trait]
impl TransactionRepository for SeaOrmTransactionRepository {
    async fn save(&self, tx: Transaction) -> DomainResult<()> {
        debug!("Saving transaction: {} (rental {})", tx.id, tx.rental_id);

        let model = transaction::ActiveModel {
            id: Set(tx.id),
            rental_id: Set(tx.rental_id),
            amount: Set(tx.amount),
            payment_method: Set(tx.payment_method.as_str().to_string()),
            payment_reference: Set(tx.payment_reference),
            status: Set(tx.status.as_str().to_string()),
            created_at: Set(tx.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Transaction>> {
        let model = transaction::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_rental_id(&self, rental_id: Uuid) -> DomainResult<Vec<Transaction>> {
        let models = transaction::Entity::find()
            .filter(transaction::Column::RentalId.eq(rental_id))
            .order_by_desc(transaction::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Transaction>> {
        let models = transaction::Entity::find()
            .order_by_desc(transaction::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        let existing = transaction::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Transaction",
                field: "id",
                value: id.to_string(),
            });
        };

        debug!("Deleting transaction: {}", id);
        existing.delete(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
