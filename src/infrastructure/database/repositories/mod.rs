//! SeaORM repository implementations

pub mod booking_repository;
pub mod inventory_repository;
pub mod loyalty_repository;
pub mod power_bank_type_repository;
pub mod rental_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod station_repository;
pub mod transaction_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
