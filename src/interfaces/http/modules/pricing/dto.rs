//! Pricing DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::pricing::PricingBreakdown;

/// Request for a rental pricing quote
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuoteRequest {
    pub power_bank_type_id: Uuid,
    #[validate(range(min = 1, max = 720))]
    pub rental_duration_hours: i32,
    /// "hourly" or "daily"
    pub rental_type: String,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub user_id: Option<Uuid>,
}

/// Quote breakdown in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct PricingBreakdownDto {
    pub base_price: i64,
    pub surcharges: i64,
    pub peak_surcharge: i64,
    pub weekend_premium: i64,
    pub discounts: i64,
    pub loyalty_discount: i64,
    pub loyalty_discount_percentage: i32,
    pub security_deposit: i64,
    pub total_amount: i64,
}

impl From<PricingBreakdown> for PricingBreakdownDto {
    fn from(b: PricingBreakdown) -> Self {
        Self {
            base_price: b.base_price,
            surcharges: b.surcharges,
            peak_surcharge: b.peak_surcharge,
            weekend_premium: b.weekend_premium,
            discounts: b.discounts,
            loyalty_discount: b.loyalty_discount,
            loyalty_discount_percentage: b.loyalty_discount_percentage,
            security_deposit: b.security_deposit,
            total_amount: b.total_amount,
        }
    }
}
