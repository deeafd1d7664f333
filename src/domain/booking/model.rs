//! Booking domain entity

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

/// Booking status
///
/// `Confirmed` is terminal; a failed confirmation leaves (or reverts)
/// the booking to `Pending`. There is no rejected state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "confirmed" => Self::Confirmed,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer intends to pay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "card" => Self::Card,
            _ => Self::BankTransfer,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer intent to rent, keyed by a human-readable order id that the
/// customer quotes as the bank-transfer reference.
#[derive(Debug, Clone)]
pub struct Booking {
    /// Unique booking ID
    pub id: Uuid,
    /// Human-readable order reference, e.g. `BK-482913057`
    pub order_id: String,
    /// Customer placing the booking
    pub user_id: Uuid,
    /// Station to pick up from
    pub station_id: Uuid,
    /// Power bank SKU booked
    pub power_bank_type_id: Uuid,
    /// Quoted amount in minor currency units
    pub total_amount: i64,
    /// Payment method the customer selected
    pub payment_method: PaymentMethod,
    /// Current status
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        total_amount: i64,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id: generate_order_id(),
            user_id,
            station_id,
            power_bank_type_id,
            total_amount,
            payment_method,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn confirm(&mut self) {
        self.status = BookingStatus::Confirmed;
    }

    pub fn revert_to_pending(&mut self) {
        self.status = BookingStatus::Pending;
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

/// Generate a human-readable order id: `BK-` followed by the last six
/// digits of the epoch-millis timestamp and three random digits.
pub fn generate_order_id() -> String {
    let timestamp = Utc::now().timestamp_millis().to_string();
    let tail: String = timestamp
        .chars()
        .rev()
        .take(6)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    let random: u32 = rand::thread_rng().gen_range(0..1000);
    format!("BK-{}{:03}", tail, random)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            480_000,
            PaymentMethod::BankTransfer,
        )
    }

    #[test]
    fn new_booking_is_pending() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Pending);
        assert!(!b.is_confirmed());
    }

    #[test]
    fn confirm_and_revert() {
        let mut b = sample_booking();
        b.confirm();
        assert!(b.is_confirmed());
        b.revert_to_pending();
        assert_eq!(b.status, BookingStatus::Pending);
    }

    #[test]
    fn order_id_format() {
        let order_id = generate_order_id();
        assert!(order_id.starts_with("BK-"));
        assert_eq!(order_id.len(), 12);
        assert!(order_id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn payment_method_roundtrip() {
        for m in [PaymentMethod::Card, PaymentMethod::BankTransfer] {
            assert_eq!(PaymentMethod::from_str(m.as_str()), m);
        }
    }

    #[test]
    fn unknown_booking_status_defaults_to_pending() {
        assert_eq!(BookingStatus::from_str("weird"), BookingStatus::Pending);
    }
}
