//! Create power_bank_types table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PowerBankTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PowerBankTypes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PowerBankTypes::Name).string().not_null())
                    .col(
                        ColumnDef::new(PowerBankTypes::Category)
                            .string()
                            .not_null()
                            .default("standard"),
                    )
                    .col(
                        ColumnDef::new(PowerBankTypes::CapacityMah)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PowerBankTypes::PricePerHour)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PowerBankTypes::PricePerDay)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PowerBankTypes::TargetDevices)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PowerBankTypes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PowerBankTypes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PowerBankTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PowerBankTypes {
    Table,
    Id,
    Name,
    Category,
    CapacityMah,
    PricePerHour,
    PricePerDay,
    TargetDevices,
    CreatedAt,
    UpdatedAt,
}
