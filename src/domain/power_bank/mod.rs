//! Power-bank type aggregate
//!
//! Contains the PowerBankType SKU entity and repository interface.

pub mod model;
pub mod repository;

pub use model::{PowerBankCategory, PowerBankType};
pub use repository::PowerBankTypeRepository;
