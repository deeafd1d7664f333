//! Payment DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::transaction::Transaction;

/// Request to charge a card for a rental
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CardPaymentRequest {
    pub rental_id: Uuid,
    /// Amount in minor currency units
    #[validate(range(min = 1))]
    pub amount: i64,
    /// Wallet phone number
    #[validate(length(min = 7, max = 20))]
    pub phone: String,
}

/// Transaction details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionDto {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub amount: i64,
    pub payment_method: String,
    pub payment_reference: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            rental_id: t.rental_id,
            amount: t.amount,
            payment_method: t.payment_method.as_str().to_string(),
            payment_reference: t.payment_reference,
            status: t.status.as_str().to_string(),
            created_at: t.created_at,
        }
    }
}
