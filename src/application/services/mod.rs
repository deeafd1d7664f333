//! Application services

pub mod booking;
pub mod inventory;
pub mod orchestrator;
pub mod payment;
pub mod pricing;
pub mod reservation;
pub mod reservation_expiry;

#[cfg(test)]
pub(crate) mod test_support;

pub use booking::BookingService;
pub use inventory::{InventoryService, SyncAdjustment, SyncReport};
pub use orchestrator::RentalOrchestrator;
pub use payment::PaymentService;
pub use pricing::PricingService;
pub use reservation::ReservationService;
pub use reservation_expiry::start_reservation_expiry_task;
