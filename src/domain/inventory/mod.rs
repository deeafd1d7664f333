//! Station inventory aggregate
//!
//! Per-(station, power-bank-type) stock counters and the repository
//! interface carrying the conditional-decrement guard.

pub mod model;
pub mod repository;

pub use model::{StationInventory, LOW_STOCK_THRESHOLD};
pub use repository::InventoryRepository;
