//! Rental aggregate
//!
//! Active/completed power-bank loans with their pricing snapshot, plus
//! the repository interface used by the confirmation orchestration.

pub mod model;
pub mod repository;

pub use model::{
    ExtensionUnit, Rental, RentalDetails, RentalStatus, RentalType, CANCELLATION_NOTICE_HOURS,
    DEFAULT_RENTAL_DAYS, DUPLICATE_WINDOW_MINUTES,
};
pub use repository::RentalRepository;
