//! Rental domain entity

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Confirming a booking without an explicit return time rents for one day.
pub const DEFAULT_RENTAL_DAYS: i64 = 1;

/// An active rental for the same (user, station, type) created within
/// this window blocks another confirmation.
pub const DUPLICATE_WINDOW_MINUTES: i64 = 10;

/// Advance bookings can be cancelled until this long before the start.
pub const CANCELLATION_NOTICE_HOURS: i64 = 1;

/// Rental status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalStatus {
    /// Advance booking waiting for its scheduled start
    Scheduled,
    /// Power bank is out with the customer
    Active,
    /// Returned (admin-confirmed or force-returned)
    Completed,
    /// Cancelled before completion
    Cancelled,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "scheduled" => Self::Scheduled,
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hourly or daily billing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalType {
    Hourly,
    Daily,
}

impl RentalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "daily" => Self::Daily,
            _ => Self::Hourly,
        }
    }
}

impl std::fmt::Display for RentalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit for rental extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionUnit {
    Hours,
    Days,
}

impl ExtensionUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "days" => Self::Days,
            _ => Self::Hours,
        }
    }
}

/// A power-bank loan with its pricing snapshot.
///
/// All amounts are minor currency units, copied from the pricing
/// breakdown at creation time and never recomputed afterwards.
#[derive(Debug, Clone)]
pub struct Rental {
    /// Unique rental ID
    pub id: Uuid,
    /// Customer renting
    pub user_id: Uuid,
    /// Station the unit was taken from
    pub station_id: Uuid,
    /// Power bank SKU rented
    pub power_bank_type_id: Uuid,
    /// Booking this rental was confirmed from, if any
    pub booking_id: Option<Uuid>,
    /// When the loan started (or is scheduled to start)
    pub start_time: DateTime<Utc>,
    /// When the loan ends; set on confirmation, completion or cancellation
    pub end_time: Option<DateTime<Utc>>,
    /// Current status
    pub status: RentalStatus,
    /// Billed duration in hours
    pub rental_duration_hours: i32,
    /// Hourly or daily billing
    pub rental_type: RentalType,
    pub base_price: i64,
    pub surcharges: i64,
    pub peak_hour_surcharge: i64,
    pub weekend_premium: i64,
    pub loyalty_discount: i64,
    pub security_deposit: i64,
    pub total_amount: i64,
    /// Future start for advance bookings
    pub scheduled_start_time: Option<DateTime<Utc>>,
    /// Free-cancellation deadline for advance bookings
    pub cancellation_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// Rental created by confirming a booking: starts now, ends at the
    /// requested return time or after the default one-day period, with
    /// the booking amount carried over unchanged.
    pub fn from_confirmed_booking(
        booking: &crate::domain::booking::Booking,
        return_time: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        let end_time = return_time.unwrap_or(now + Duration::days(DEFAULT_RENTAL_DAYS));
        Self {
            id: Uuid::new_v4(),
            user_id: booking.user_id,
            station_id: booking.station_id,
            power_bank_type_id: booking.power_bank_type_id,
            booking_id: Some(booking.id),
            start_time: now,
            end_time: Some(end_time),
            status: RentalStatus::Active,
            rental_duration_hours: ((end_time - now).num_hours().max(1)) as i32,
            rental_type: RentalType::Daily,
            base_price: booking.total_amount,
            surcharges: 0,
            peak_hour_surcharge: 0,
            weekend_premium: 0,
            loyalty_discount: 0,
            security_deposit: 0,
            total_amount: booking.total_amount,
            scheduled_start_time: None,
            cancellation_deadline: None,
            created_at: now,
        }
    }

    /// Customer-initiated rental with a full pricing breakdown. A future
    /// `scheduled_start_time` makes it an advance booking with a
    /// cancellation deadline one hour before the start.
    #[allow(clippy::too_many_arguments)]
    pub fn priced(
        user_id: Uuid,
        station_id: Uuid,
        power_bank_type_id: Uuid,
        rental_duration_hours: i32,
        rental_type: RentalType,
        pricing: &crate::domain::pricing::PricingBreakdown,
        scheduled_start_time: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        let start_time = scheduled_start_time.unwrap_or(now);
        Self {
            id: Uuid::new_v4(),
            user_id,
            station_id,
            power_bank_type_id,
            booking_id: None,
            start_time,
            end_time: None,
            status: if scheduled_start_time.is_some() {
                RentalStatus::Scheduled
            } else {
                RentalStatus::Active
            },
            rental_duration_hours,
            rental_type,
            base_price: pricing.base_price,
            surcharges: pricing.surcharges,
            peak_hour_surcharge: pricing.peak_surcharge,
            weekend_premium: pricing.weekend_premium,
            loyalty_discount: pricing.loyalty_discount,
            security_deposit: pricing.security_deposit,
            total_amount: pricing.total_amount,
            scheduled_start_time,
            cancellation_deadline: Some(
                start_time - Duration::hours(CANCELLATION_NOTICE_HOURS),
            ),
            created_at: now,
        }
    }

    /// Mark as completed at `now`. Inventory is deliberately untouched:
    /// counters only recover through a physical return or the
    /// reconciliation sweep.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = RentalStatus::Completed;
        self.end_time = Some(now);
    }

    /// Mark as cancelled at `now`. Releases no inventory or reservation.
    pub fn cancel(&mut self, now: DateTime<Utc>) {
        self.status = RentalStatus::Cancelled;
        self.end_time = Some(now);
    }

    /// Push `end_time` out by the given amount. No upper bound and no
    /// re-pricing.
    pub fn extend(&mut self, amount: i64, unit: ExtensionUnit) -> Option<DateTime<Utc>> {
        let current = self.end_time?;
        let new_end = match unit {
            ExtensionUnit::Hours => current + Duration::hours(amount),
            ExtensionUnit::Days => current + Duration::days(amount),
        };
        self.end_time = Some(new_end);
        Some(new_end)
    }

    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }
}

/// Rental joined with display names, fetched before status updates so
/// notifications can be built even after the row changes.
#[derive(Debug, Clone)]
pub struct RentalDetails {
    pub rental: Rental,
    pub station_name: String,
    pub power_bank_type_name: String,
}

// ── Tests ──────────────────────────────────────────────────────
