//! Booking DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::booking::Booking;

/// Request to create a booking
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub user_id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    /// "card" or "bank_transfer"
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
}

fn default_payment_method() -> String {
    "bank_transfer".to_string()
}

/// Request to confirm a booking's payment
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ConfirmPaymentRequest {
    /// Return time override; defaults to one day from now
    pub return_time: Option<DateTime<Utc>>,
}

/// Booking details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub id: Uuid,
    pub order_id: String,
    pub user_id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    pub total_amount: i64,
    pub payment_method: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            order_id: b.order_id,
            user_id: b.user_id,
            station_id: b.station_id,
            power_bank_type_id: b.power_bank_type_id,
            total_amount: b.total_amount,
            payment_method: b.payment_method.as_str().to_string(),
            status: b.status.as_str().to_string(),
            created_at: b.created_at,
        }
    }
}
