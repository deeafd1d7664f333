//! Rental DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::rental::Rental;

/// Request to start a customer rental
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StartRentalRequest {
    pub user_id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    /// Rental duration in hours
    #[validate(range(min = 1, max = 720))]
    pub rental_duration_hours: i32,
    /// "hourly" or "daily"
    #[serde(default = "default_rental_type")]
    pub rental_type: String,
    /// Future start schedules an advance booking
    pub scheduled_start_time: Option<DateTime<Utc>>,
}

fn default_rental_type() -> String {
    "hourly".to_string()
}

/// Request to extend a rental
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExtendRentalRequest {
    #[validate(range(min = 1, max = 365))]
    pub amount: i64,
    /// "hours" or "days"
    pub unit: String,
}

/// Rental details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RentalDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    pub booking_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: String,
    pub rental_duration_hours: i32,
    pub rental_type: String,
    pub base_price: i64,
    pub surcharges: i64,
    pub peak_hour_surcharge: i64,
    pub weekend_premium: i64,
    pub loyalty_discount: i64,
    pub security_deposit: i64,
    pub total_amount: i64,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub cancellation_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Rental> for RentalDto {
    fn from(r: Rental) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            station_id: r.station_id,
            power_bank_type_id: r.power_bank_type_id,
            booking_id: r.booking_id,
            start_time: r.start_time,
            end_time: r.end_time,
            status: r.status.as_str().to_string(),
            rental_duration_hours: r.rental_duration_hours,
            rental_type: r.rental_type.as_str().to_string(),
            base_price: r.base_price,
            surcharges: r.surcharges,
            peak_hour_surcharge: r.peak_hour_surcharge,
            weekend_premium: r.weekend_premium,
            loyalty_discount: r.loyalty_discount,
            security_deposit: r.security_deposit,
            total_amount: r.total_amount,
            scheduled_start_time: r.scheduled_start_time,
            cancellation_deadline: r.cancellation_deadline,
            created_at: r.created_at,
        }
    }
}
