//! Booking aggregate
//!
//! A pending intent to rent, awaiting admin payment confirmation.

pub mod model;
pub mod repository;

pub use model::{Booking, BookingStatus, PaymentMethod};
pub use repository::BookingRepository;
