//! Power bank type entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "power_bank_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    /// Category: standard, premium
    pub category: String,

    pub capacity_mah: i32,

    /// Minor currency units
    pub price_per_hour: i64,

    /// Minor currency units
    pub price_per_day: i64,

    /// Comma-separated device classes
    pub target_devices: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::station_inventory::Entity")]
    StationInventory,
}

impl Related<super::station_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationInventory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
