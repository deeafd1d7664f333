//! Infrastructure layer
//!
//! External concerns: database connection, SeaORM entities and
//! repository implementations.

pub mod database;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, DatabaseConfig};
