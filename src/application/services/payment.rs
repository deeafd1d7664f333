//! Card payment service
//!
//! Optional customer-initiated card path: charge the gateway, then
//! record a completed transaction against the rental. Separate from
//! the admin bank-transfer confirmation, which never calls the
//! gateway.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::application::payment::{ChargeRequest, PaymentGateway};
use crate::domain::booking::PaymentMethod;
use crate::domain::transaction::Transaction;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for customer card payments
pub struct PaymentService {
    repos: Arc<dyn RepositoryProvider>,
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { repos, gateway }
    }

    /// Charge a card for a rental and record the transaction.
    pub async fn charge_card(
        &self,
        rental_id: Uuid,
        amount_minor: i64,
        phone: &str,
    ) -> DomainResult<Transaction> {
        let mut rental = self
            .repos
            .rentals()
            .find_by_id(rental_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Rental",
                field: "id",
                value: rental_id.to_string(),
            })?;

        let outcome = self
            .gateway
            .charge(ChargeRequest {
                amount_minor,
                phone: phone.to_string(),
                reference: rental_id.to_string(),
                description: "Power bank rental".to_string(),
            })
            .await?;

        let transaction = Transaction::completed(
            rental_id,
            amount_minor,
            PaymentMethod::Card,
            outcome.payment_reference.clone(),
        );
        self.repos.transactions().save(transaction.clone()).await?;

        // Mirror the charged amount onto the rental
        rental.total_amount = amount_minor;
        self.repos.rentals().update(rental).await?;

        info!(
            rental_id = %rental_id,
            reference = %outcome.payment_reference,
            "Card payment recorded"
        );

        Ok(transaction)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::payment::SimulatedOpayGateway;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::booking::Booking;
    use crate::domain::rental::Rental;
    use crate::domain::transaction::TransactionStatus;

    fn seed_rental(repos: &InMemoryRepos) -> Uuid {
        let booking = Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            480_000,
            PaymentMethod::Card,
        );
        let rental = Rental::from_confirmed_booking(&booking, None);
        let id = rental.id;
        repos.rentals.lock().unwrap().push(rental);
        id
    }

    #[tokio::test]
    async fn card_charge_records_completed_transaction() {
        let repos = Arc::new(InMemoryRepos::new());
        let rental_id = seed_rental(&repos);
        let svc = PaymentService::new(repos.clone(), Arc::new(SimulatedOpayGateway));

        let tx = svc
            .charge_card(rental_id, 520_000, "+2348012345678")
            .await
            .unwrap();

        assert_eq!(tx.status, TransactionStatus::Completed);
        assert_eq!(tx.payment_method, PaymentMethod::Card);
        assert!(tx
            .payment_reference
            .as_deref()
            .unwrap()
            .starts_with("opay_"));

        // charged amount mirrored onto the rental
        let rentals = repos.rentals.lock().unwrap();
        assert_eq!(rentals[0].total_amount, 520_000);
    }

    #[tokio::test]
    async fn unknown_rental_rejected_before_charging() {
        let repos = Arc::new(InMemoryRepos::new());
        let svc = PaymentService::new(repos.clone(), Arc::new(SimulatedOpayGateway));

        let err = svc
            .charge_card(Uuid::new_v4(), 520_000, "+2348012345678")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(repos.transactions.lock().unwrap().is_empty());
    }
}
