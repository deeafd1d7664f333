//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_stations;
mod m20250301_000002_create_power_bank_types;
mod m20250301_000003_create_station_inventory;
mod m20250301_000004_create_reservations;
mod m20250301_000005_create_bookings;
mod m20250301_000006_create_rentals;
mod m20250301_000007_create_transactions;
mod m20250301_000008_create_user_loyalty;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_stations::Migration),
            Box::new(m20250301_000002_create_power_bank_types::Migration),
            Box::new(m20250301_000003_create_station_inventory::Migration),
            Box::new(m20250301_000004_create_reservations::Migration),
            Box::new(m20250301_000005_create_bookings::Migration),
            Box::new(m20250301_000006_create_rentals::Migration),
            Box::new(m20250301_000007_create_transactions::Migration),
            Box::new(m20250301_000008_create_user_loyalty::Migration),
        ]
    }
}
