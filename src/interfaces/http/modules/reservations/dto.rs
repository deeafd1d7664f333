//! Reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::reservation::Reservation;

/// Request to place a new hold
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservationRequest {
    /// User placing the hold
    pub user_id: Uuid,
    /// Station to reserve at
    pub station_id: Uuid,
    /// Power bank type to hold
    pub power_bank_type_id: Uuid,
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    pub status: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            station_id: r.station_id,
            power_bank_type_id: r.power_bank_type_id,
            status: r.status.as_str().to_string(),
            expires_at: r.expires_at,
            created_at: r.created_at,
        }
    }
}

/// Result of an on-demand expiry sweep
#[derive(Debug, Serialize, ToSchema)]
pub struct ExpireSweepResponse {
    pub expired: usize,
}
