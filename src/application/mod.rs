//! Application layer
//!
//! Business logic: reservation holds, booking confirmation
//! orchestration, inventory reconciliation, pricing and the payment
//! gateway port.

pub mod payment;
pub mod services;

pub use payment::{ChargeOutcome, ChargeRequest, PaymentGateway, SimulatedOpayGateway};
pub use services::{
    BookingService, InventoryService, PaymentService, PricingService, RentalOrchestrator,
    ReservationService,
};
