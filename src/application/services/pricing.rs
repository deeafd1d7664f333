//! Pricing service
//!
//! Resolves the power bank SKU and the caller's loyalty discount, then
//! computes the quote. The orchestration treats a quote as a pure
//! function called once per rental; failures are never retried here.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::pricing::{PricingBreakdown, PricingRequest};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for rental pricing quotes
pub struct PricingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl PricingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Quote a rental
    pub async fn quote(&self, request: &PricingRequest) -> DomainResult<PricingBreakdown> {
        if request.rental_duration_hours <= 0 {
            return Err(DomainError::PricingFailed(
                "rental duration must be positive".to_string(),
            ));
        }

        let power_bank_type = self
            .repos
            .power_bank_types()
            .find_by_id(request.power_bank_type_id)
            .await?
            .ok_or_else(|| {
                DomainError::PricingFailed(format!(
                    "unknown power bank type: {}",
                    request.power_bank_type_id
                ))
            })?;

        let loyalty_discount_percentage = match request.user_id {
            Some(user_id) => self
                .repos
                .loyalty()
                .find_by_user(user_id)
                .await?
                .map(|l| l.discount_percentage)
                .unwrap_or(0),
            None => 0,
        };

        let start_time = request.scheduled_start_time.unwrap_or_else(Utc::now);

        let breakdown = PricingBreakdown::compute(
            &power_bank_type,
            request.rental_duration_hours,
            &request.rental_type,
            start_time,
            loyalty_discount_percentage,
        );

        debug!(
            power_bank_type = %power_bank_type.name,
            duration_hours = request.rental_duration_hours,
            total = breakdown.total_amount,
            "Pricing quote computed"
        );

        Ok(breakdown)
    }
}

// ── Tests ──────────────────────────────────────────────────────
