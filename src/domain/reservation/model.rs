//! Reservation domain entity

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// How long a hold lasts before the sweep expires it.
pub const HOLD_MINUTES: i64 = 5;

/// Reservation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Hold is live; blocks further reservations by the same user
    Active,
    /// Hold lapsed or was cancelled
    Expired,
    /// A rental was created from this hold
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::Expired,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advisory hold on a (station, power-bank-type) for one user.
///
/// The hold never touches inventory counters; it is enforced purely by
/// the one-active-reservation-per-user rule.
#[derive(Debug, Clone)]
pub struct Reservation {
    /// Unique reservation ID
    pub id: Uuid,
    /// User holding the reservation
    pub user_id: Uuid,
    /// Station the hold targets
    pub station_id: Uuid,
    /// Power bank SKU the hold targets
    pub power_bank_type_id: Uuid,
    /// Current status
    pub status: ReservationStatus,
    /// Hold deadline (created_at + 5 minutes)
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(user_id: Uuid, station_id: Uuid, power_bank_type_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            station_id,
            power_bank_type_id,
            status: ReservationStatus::Active,
            expires_at: now + Duration::minutes(HOLD_MINUTES),
            created_at: now,
        }
    }

    /// Mark as completed (a rental materialized from this hold)
    pub fn complete(&mut self) {
        self.status = ReservationStatus::Completed;
    }

    /// Mark as expired; cancellation uses the same terminal status
    pub fn expire(&mut self) {
        self.status = ReservationStatus::Expired;
    }

    /// Check if this hold is still active
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Check if the hold deadline has passed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4())
    }

    #[test]
    fn new_reservation_is_active_with_five_minute_hold() {
        let r = sample_reservation();
        assert!(r.is_active());
        let hold = r.expires_at - r.created_at;
        assert_eq!(hold, Duration::minutes(5));
    }

    #[test]
    fn complete_sets_completed() {
        let mut r = sample_reservation();
        r.complete();
        assert_eq!(r.status, ReservationStatus::Completed);
        assert!(!r.is_active());
    }

    #[test]
    fn expire_sets_expired() {
        let mut r = sample_reservation();
        r.expire();
        assert_eq!(r.status, ReservationStatus::Expired);
        assert!(!r.is_active());
    }

    #[test]
    fn overdue_one_second_past_deadline() {
        let r = sample_reservation();
        let just_after = r.expires_at + Duration::seconds(1);
        assert!(r.is_overdue(just_after));
        assert!(!r.is_overdue(r.expires_at));
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            ReservationStatus::Active,
            ReservationStatus::Expired,
            ReservationStatus::Completed,
        ] {
            assert_eq!(ReservationStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_expired() {
        assert_eq!(
            ReservationStatus::from_str("held"),
            ReservationStatus::Expired
        );
    }
}
