//! User loyalty aggregate
//!
//! Read by the pricing calculator; never mutated by the booking core.

pub mod model;
pub mod repository;

pub use model::{LoyaltyTier, UserLoyalty};
pub use repository::LoyaltyRepository;
