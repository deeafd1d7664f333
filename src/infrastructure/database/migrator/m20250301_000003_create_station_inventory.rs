//! Create station_inventory table
//!
//! One row per (station, power-bank-type); the pair is unique. The
//! available_units column is the allocation counter guarded by the
//! conditional decrement.

use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_stations::Stations;
use super::m20250301_000002_create_power_bank_types::PowerBankTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StationInventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StationInventory::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StationInventory::StationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StationInventory::PowerBankTypeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StationInventory::TotalUnits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(StationInventory::AvailableUnits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(StationInventory::ReservedUnits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(StationInventory::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_station_inventory_station")
                            .from(StationInventory::Table, StationInventory::StationId)
                            .to(Stations::Table, Stations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_station_inventory_power_bank_type")
                            .from(StationInventory::Table, StationInventory::PowerBankTypeId)
                            .to(PowerBankTypes::Table, PowerBankTypes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_station_inventory_station_type")
                    .table(StationInventory::Table)
                    .col(StationInventory::StationId)
                    .col(StationInventory::PowerBankTypeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationInventory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum StationInventory {
    Table,
    Id,
    StationId,
    PowerBankTypeId,
    TotalUnits,
    AvailableUnits,
    ReservedUnits,
    UpdatedAt,
}
