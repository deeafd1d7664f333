//! Reservation aggregate
//!
//! Short-lived advisory holds preceding payment, plus the repository
//! interface used by the expiry sweep.

pub mod model;
pub mod repository;

pub use model::{Reservation, ReservationStatus, HOLD_MINUTES};
pub use repository::ReservationRepository;
