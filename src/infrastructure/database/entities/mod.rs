//! SeaORM entities, one per table

pub mod booking;
pub mod power_bank_type;
pub mod rental;
pub mod reservation;
pub mod station;
pub mod station_inventory;
pub mod transaction;
pub mod user_loyalty;
