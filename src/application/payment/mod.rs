//! Payment gateway port
//!
//! The customer card path charges through an external gateway. The
//! admin bank-transfer confirmation never touches this port; it
//! reconciles payments manually against the booking's order id.

use async_trait::async_trait;
use rand::Rng;

use crate::domain::{DomainError, DomainResult};

/// Charge request forwarded to the gateway
#[derive(Debug, Clone)]
pub struct ChargeRequest {
    /// Amount in minor currency units
    pub amount_minor: i64,
    /// Customer phone number registered with the wallet
    pub phone: String,
    /// Our reference (booking order id or rental id)
    pub reference: String,
    /// Human-readable description shown on the customer's statement
    pub description: String,
}

/// Gateway response for a successful charge
#[derive(Debug, Clone)]
pub struct ChargeOutcome {
    /// Gateway-issued payment reference
    pub payment_reference: String,
    pub message: String,
}

/// External payment gateway
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: ChargeRequest) -> DomainResult<ChargeOutcome>;
}

/// Simulated gateway used until the real integration lands.
///
/// Accepts every charge and fabricates an `opay_<ts>_<rand>` reference
/// the way the hosted stub did.
pub struct SimulatedOpayGateway;

#[async_trait]
impl PaymentGateway for SimulatedOpayGateway {
    async fn charge(&self, request: ChargeRequest) -> DomainResult<ChargeOutcome> {
        if request.amount_minor <= 0 {
            return Err(DomainError::Validation(
                "charge amount must be positive".to_string(),
            ));
        }
        if request.phone.trim().is_empty() {
            return Err(DomainError::Validation(
                "phone number is required".to_string(),
            ));
        }

        let suffix: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(9)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect();
        let payment_reference =
            format!("opay_{}_{}", chrono::Utc::now().timestamp_millis(), suffix);

        Ok(ChargeOutcome {
            payment_reference,
            message: "Payment processed successfully".to_string(),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount_minor: i64, phone: &str) -> ChargeRequest {
        ChargeRequest {
            amount_minor,
            phone: phone.to_string(),
            reference: "BK-482913057".to_string(),
            description: "Power bank rental".to_string(),
        }
    }

    #[tokio::test]
    async fn simulated_gateway_issues_reference() {
        let outcome = SimulatedOpayGateway
            .charge(request(480_000, "+2348012345678"))
            .await
            .unwrap();
        assert!(outcome.payment_reference.starts_with("opay_"));
    }

    #[tokio::test]
    async fn zero_amount_rejected() {
        let err = SimulatedOpayGateway
            .charge(request(0, "+2348012345678"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_phone_rejected() {
        let err = SimulatedOpayGateway
            .charge(request(480_000, "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
