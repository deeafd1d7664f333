//! Inventory DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::services::{SyncAdjustment, SyncReport};

/// Request to set the stock level of one (station, type) row
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetInventoryRequest {
    /// Units assigned; available resets to the same value
    #[validate(range(min = 0, max = 10000))]
    pub total_units: i32,
}

/// One row adjusted by the reconciliation sweep
#[derive(Debug, Serialize, ToSchema)]
pub struct SyncAdjustmentDto {
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    pub old_available: i32,
    pub new_available: i32,
}

impl From<SyncAdjustment> for SyncAdjustmentDto {
    fn from(a: SyncAdjustment) -> Self {
        Self {
            station_id: a.station_id,
            power_bank_type_id: a.power_bank_type_id,
            old_available: a.old_available,
            new_available: a.new_available,
        }
    }
}

/// Reconciliation run report
#[derive(Debug, Serialize, ToSchema)]
pub struct SyncReportDto {
    pub rows_checked: usize,
    pub rows_adjusted: usize,
    pub adjustments: Vec<SyncAdjustmentDto>,
}

impl From<SyncReport> for SyncReportDto {
    fn from(r: SyncReport) -> Self {
        Self {
            rows_checked: r.rows_checked,
            rows_adjusted: r.adjustments.len(),
            adjustments: r.adjustments.into_iter().map(Into::into).collect(),
        }
    }
}
