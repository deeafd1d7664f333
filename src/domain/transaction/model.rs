//! Transaction domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::booking::PaymentMethod;

/// Payment transaction status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionStatus {
    /// Awaiting settlement
    Pending,
    /// Settled successfully
    Completed,
    /// Settlement failed
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recorded payment event for a rental.
///
/// Deleted only as part of the confirmation rollback compensation.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Unique transaction ID
    pub id: Uuid,
    /// Rental this payment settles
    pub rental_id: Uuid,
    /// Amount in minor currency units
    pub amount: i64,
    /// Payment channel
    pub payment_method: PaymentMethod,
    /// External reference (order id for transfers, gateway ref for cards)
    pub payment_reference: Option<String>,
    /// Settlement status
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Completed transaction recorded when an admin confirms a
    /// bank-transfer payment against a booking.
    pub fn completed(
        rental_id: Uuid,
        amount: i64,
        payment_method: PaymentMethod,
        payment_reference: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            rental_id,
            amount,
            payment_method,
            payment_reference: Some(payment_reference.into()),
            status: TransactionStatus::Completed,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TransactionStatus::Completed
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_constructor_sets_reference_and_status() {
        let rental_id = Uuid::new_v4();
        let tx = Transaction::completed(
            rental_id,
            480_000,
            PaymentMethod::BankTransfer,
            "BK-482913057",
        );
        assert!(tx.is_completed());
        assert_eq!(tx.rental_id, rental_id);
        assert_eq!(tx.payment_reference.as_deref(), Some("BK-482913057"));
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Completed,
            TransactionStatus::Failed,
        ] {
            assert_eq!(TransactionStatus::from_str(status.as_str()), status);
        }
    }
}
