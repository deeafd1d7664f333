//! Reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,

    /// Reservation status: active, expired, completed
    pub status: String,

    pub expires_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id"
    )]
    Station,
    #[sea_orm(
        belongs_to = "super::power_bank_type::Entity",
        from = "Column::PowerBankTypeId",
        to = "super::power_bank_type::Column::Id"
    )]
    PowerBankType,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl Related<super::power_bank_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PowerBankType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
