pub mod booking;
pub mod inventory;
pub mod loyalty;
pub mod power_bank;
pub mod pricing;
pub mod rental;
pub mod repositories;
pub mod reservation;
pub mod station;
pub mod transaction;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus, PaymentMethod};
pub use inventory::StationInventory;
pub use loyalty::{LoyaltyTier, UserLoyalty};
pub use power_bank::{PowerBankCategory, PowerBankType};
pub use pricing::{PricingBreakdown, PricingRequest};
pub use rental::{ExtensionUnit, Rental, RentalStatus, RentalType};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{Reservation, ReservationStatus};
pub use station::Station;
pub use transaction::{Transaction, TransactionStatus};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
