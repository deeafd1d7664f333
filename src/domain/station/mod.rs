//! Station aggregate
//!
//! Contains the Station entity and repository interface.

pub mod model;
pub mod repository;

pub use model::Station;
pub use repository::StationRepository;
