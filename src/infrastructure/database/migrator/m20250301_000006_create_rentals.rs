//! Create rentals table
//!
//! Carries the pricing snapshot copied from the quote at creation time.

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_stations::Stations;
use super::m20250301_000002_create_power_bank_types::PowerBankTypes;
use super::m20250301_000005_create_bookings::Bookings;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rentals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rentals::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Rentals::UserId).uuid().not_null())
                    .col(ColumnDef::new(Rentals::StationId).uuid().not_null())
                    .col(ColumnDef::new(Rentals::PowerBankTypeId).uuid().not_null())
                    .col(ColumnDef::new(Rentals::BookingId).uuid())
                    .col(
                        ColumnDef::new(Rentals::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Rentals::EndTime).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Rentals::Status)
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Rentals::RentalDurationHours)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Rentals::RentalType)
                            .string()
                            .not_null()
                            .default("hourly"),
                    )
                    .col(
                        ColumnDef::new(Rentals::BasePrice)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rentals::Surcharges)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rentals::PeakHourSurcharge)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rentals::WeekendPremium)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rentals::LoyaltyDiscount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rentals::SecurityDeposit)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Rentals::TotalAmount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Rentals::ScheduledStartTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(Rentals::CancellationDeadline).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Rentals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_station")
                            .from(Rentals::Table, Rentals::StationId)
                            .to(Stations::Table, Stations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_power_bank_type")
                            .from(Rentals::Table, Rentals::PowerBankTypeId)
                            .to(PowerBankTypes::Table, PowerBankTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_booking")
                            .from(Rentals::Table, Rentals::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rentals_status")
                    .table(Rentals::Table)
                    .col(Rentals::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rentals_booking")
                    .table(Rentals::Table)
                    .col(Rentals::BookingId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rentals_user_station_type")
                    .table(Rentals::Table)
                    .col(Rentals::UserId)
                    .col(Rentals::StationId)
                    .col(Rentals::PowerBankTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rentals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rentals {
    Table,
    Id,
    UserId,
    StationId,
    PowerBankTypeId,
    BookingId,
    StartTime,
    EndTime,
    Status,
    RentalDurationHours,
    RentalType,
    BasePrice,
    Surcharges,
    PeakHourSurcharge,
    WeekendPremium,
    LoyaltyDiscount,
    SecurityDeposit,
    TotalAmount,
    ScheduledStartTime,
    CancellationDeadline,
    CreatedAt,
}
