//! # ChargeGo Rental Backend
//!
//! Backend service for a power-bank rental platform: stations, typed
//! power-bank SKUs, per-station inventory ledgers, short-lived
//! reservations, bookings confirmed into rentals, and the admin
//! return/extension flows.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic, orchestration and background tasks
//! - **infrastructure**: External concerns (database, SeaORM repositories)
//! - **interfaces**: REST API with Swagger docs, WebSocket notifications
//! - **notifications**: Real-time event bus for UI clients

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod notifications;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, router::RouterDeps};

// Re-export notifications
pub use notifications::{create_event_bus, Event, EventBus, SharedEventBus};
