//! Station inventory domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Rows with fewer available units than this raise a low-stock alert.
pub const LOW_STOCK_THRESHOLD: i32 = 3;

/// Per-(station, power-bank-type) stock counter.
///
/// Invariant at rest: `0 <= available_units <= total_units`.
/// `available_units` goes down by exactly one when a booking's payment
/// is confirmed; it goes back up only through a physical return to the
/// station or the reconciliation sweep, never through the admin
/// return-confirmation flow.
#[derive(Debug, Clone)]
pub struct StationInventory {
    /// Unique row ID
    pub id: Uuid,
    /// Station this row belongs to
    pub station_id: Uuid,
    /// Power bank SKU this row counts
    pub power_bank_type_id: Uuid,
    /// Units assigned to the station
    pub total_units: i32,
    /// Units currently rentable
    pub available_units: i32,
    /// Units held by advisory reservations (informational only)
    pub reserved_units: i32,
    pub updated_at: DateTime<Utc>,
}

impl StationInventory {
    pub fn new(station_id: Uuid, power_bank_type_id: Uuid, total_units: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            station_id,
            power_bank_type_id,
            total_units,
            available_units: total_units,
            reserved_units: 0,
            updated_at: Utc::now(),
        }
    }

    /// Whether at least one unit can be rented right now
    pub fn is_in_stock(&self) -> bool {
        self.available_units > 0
    }

    /// Whether the row should raise a low-stock alert
    pub fn is_low_stock(&self) -> bool {
        self.available_units < LOW_STOCK_THRESHOLD
    }

    /// Whether the counters satisfy the at-rest invariant
    pub fn has_valid_counts(&self) -> bool {
        self.available_units >= 0 && self.available_units <= self.total_units
    }

    /// Available count the reconciliation sweep expects, given the number
    /// of currently active rentals against this row. Reserved units are
    /// deliberately ignored: reservations are advisory holds.
    pub fn reconciled_available(&self, active_rentals: i32) -> i32 {
        (self.total_units - active_rentals).max(0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(total: i32, available: i32) -> StationInventory {
        let mut row = StationInventory::new(Uuid::new_v4(), Uuid::new_v4(), total);
        row.available_units = available;
        row
    }

    #[test]
    fn new_row_starts_fully_available() {
        let row = StationInventory::new(Uuid::new_v4(), Uuid::new_v4(), 5);
        assert_eq!(row.available_units, 5);
        assert_eq!(row.reserved_units, 0);
        assert!(row.has_valid_counts());
    }

    #[test]
    fn stock_checks() {
        assert!(sample_row(5, 3).is_in_stock());
        assert!(!sample_row(5, 0).is_in_stock());
    }

    #[test]
    fn low_stock_below_threshold() {
        assert!(sample_row(5, 2).is_low_stock());
        assert!(!sample_row(5, 3).is_low_stock());
    }

    #[test]
    fn invariant_violations_detected() {
        assert!(!sample_row(5, 6).has_valid_counts());
        assert!(!sample_row(5, -1).has_valid_counts());
        assert!(sample_row(5, 5).has_valid_counts());
    }

    #[test]
    fn reconciled_available_counts_active_rentals() {
        let row = sample_row(5, 1);
        assert_eq!(row.reconciled_available(2), 3);
        // more active rentals than units never goes negative
        assert_eq!(row.reconciled_available(7), 0);
    }
}
