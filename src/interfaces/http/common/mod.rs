//! Common HTTP response types

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope.
///
/// Every REST endpoint returns data in this wrapper.
/// On success: `{"success": true, "data": {...}}`,
/// on error: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// HTTP status for a domain error
pub fn error_status(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(msg) if msg.starts_with("Database error:") => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::Validation(_) | DomainError::PricingFailed(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_)
        | DomainError::DuplicateActiveReservation
        | DomainError::OutOfStock
        | DomainError::InventoryConflict
        | DomainError::AlreadyConfirmed
        | DomainError::DuplicateRental(_)
        | DomainError::InventoryUpdateFailed(_)
        | DomainError::InvalidState(_) => StatusCode::CONFLICT,
    }
}

/// Map a domain error to the standard error tuple handlers return
pub fn domain_error<T>(error: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        error_status(&error),
        Json(ApiResponse::error(error.to_string())),
    )
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope() {
        let r = ApiResponse::success(42);
        assert!(r.success);
        assert_eq!(r.data, Some(42));
        assert!(r.error.is_none());
    }

    #[test]
    fn error_envelope() {
        let r: ApiResponse<()> = ApiResponse::error("boom");
        assert!(!r.success);
        assert_eq!(r.error.as_deref(), Some("boom"));
    }

    #[test]
    fn error_statuses() {
        assert_eq!(
            error_status(&DomainError::NotFound {
                entity: "Rental",
                field: "id",
                value: "x".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&DomainError::OutOfStock),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_status(&DomainError::PricingFailed("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&DomainError::Validation("Database error: lost".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
