//! Rental entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rentals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,

    #[sea_orm(nullable)]
    pub booking_id: Option<Uuid>,

    pub start_time: DateTimeUtc,

    #[sea_orm(nullable)]
    pub end_time: Option<DateTimeUtc>,

    /// Rental status: scheduled, active, completed, cancelled
    pub status: String,

    pub rental_duration_hours: i32,

    /// Billing mode: hourly, daily
    pub rental_type: String,

    /// Pricing snapshot, minor currency units
    pub base_price: i64,
    pub surcharges: i64,
    pub peak_hour_surcharge: i64,
    pub weekend_premium: i64,
    pub loyalty_discount: i64,
    pub security_deposit: i64,
    pub total_amount: i64,

    #[sea_orm(nullable)]
    pub scheduled_start_time: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub cancellation_deadline: Option<DateTimeUtc>,

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
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id"
    )]
    Booking,
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
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

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
