//! Create user_loyalty table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLoyalty::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserLoyalty::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserLoyalty::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(UserLoyalty::TotalBookings)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserLoyalty::LoyaltyTier)
                            .string()
                            .not_null()
                            .default("bronze"),
                    )
                    .col(
                        ColumnDef::new(UserLoyalty::DiscountPercentage)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(UserLoyalty::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserLoyalty::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLoyalty::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum UserLoyalty {
    Table,
    Id,
    UserId,
    TotalBookings,
    LoyaltyTier,
    DiscountPercentage,
    CreatedAt,
    UpdatedAt,
}
