//! Power bank type DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::power_bank::PowerBankType;

/// Request to create a power bank SKU
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePowerBankTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Battery capacity in mAh
    #[validate(range(min = 1000, max = 100000))]
    pub capacity_mah: i32,
    /// Daily rate, minor currency units; hourly is derived as daily/24
    #[validate(range(min = 1))]
    pub price_per_day: i64,
}

/// Request to update pricing on a SKU
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePowerBankTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 1))]
    pub price_per_hour: Option<i64>,
    #[validate(range(min = 1))]
    pub price_per_day: Option<i64>,
}

/// Power bank SKU in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct PowerBankTypeDto {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub capacity_mah: i32,
    pub price_per_hour: i64,
    pub price_per_day: i64,
    pub target_devices: String,
}

impl From<PowerBankType> for PowerBankTypeDto {
    fn from(t: PowerBankType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            category: t.category.as_str().to_string(),
            capacity_mah: t.capacity_mah,
            price_per_hour: t.price_per_hour,
            price_per_day: t.price_per_day,
            target_devices: t.target_devices,
        }
    }
}
