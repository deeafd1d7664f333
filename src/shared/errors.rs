use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("You already have an active reservation. Complete or cancel it first.")]
    DuplicateActiveReservation,

    #[error("This power bank type is currently out of stock at this station")]
    OutOfStock,

    #[error("Inventory row changed concurrently, allocation aborted")]
    InventoryConflict,

    #[error("This booking has already been confirmed. Cannot process duplicate payment.")]
    AlreadyConfirmed,

    #[error("Duplicate rental: {0}")]
    DuplicateRental(String),

    #[error("Inventory update failed: {0}. Transaction has been cancelled.")]
    InventoryUpdateFailed(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Pricing failed: {0}")]
    PricingFailed(String),
}

impl DomainError {
    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            // DB errors mapped from repositories contain "Database error:" prefix
            DomainError::Validation(msg) => msg.starts_with("Database error:"),
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
