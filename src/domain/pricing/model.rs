//! Rental pricing calculation
//!
//! All amounts are in minor currency units. The breakdown mirrors what
//! gets persisted on a rental row: base, peak/weekend surcharges,
//! loyalty discount and security deposit.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use uuid::Uuid;

use crate::domain::power_bank::{PowerBankCategory, PowerBankType};
use crate::domain::rental::RentalType;

/// Peak surcharge: 20% of base during morning/evening rush windows
const PEAK_SURCHARGE_PERCENT: i64 = 20;
/// Weekend premium: 15% of base on Saturday and Sunday
const WEEKEND_PREMIUM_PERCENT: i64 = 15;
/// Refundable deposit per category, minor units
const STANDARD_DEPOSIT: i64 = 200_000;
const PREMIUM_DEPOSIT: i64 = 400_000;

/// Input to a pricing quote
#[derive(Debug, Clone)]
pub struct PricingRequest {
    pub power_bank_type_id: Uuid,
    pub rental_duration_hours: i32,
    pub rental_type: RentalType,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub user_id: Option<Uuid>,
}

/// Quoted price breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingBreakdown {
    pub base_price: i64,
    /// Sum of peak and weekend surcharges
    pub surcharges: i64,
    pub peak_surcharge: i64,
    pub weekend_premium: i64,
    /// Sum of all discounts
    pub discounts: i64,
    pub loyalty_discount: i64,
    pub loyalty_discount_percentage: i32,
    pub security_deposit: i64,
    pub total_amount: i64,
}

impl PricingBreakdown {
    /// All-zero breakdown, useful as a placeholder in tests
    pub fn zero() -> Self {
        Self {
            base_price: 0,
            surcharges: 0,
            peak_surcharge: 0,
            weekend_premium: 0,
            discounts: 0,
            loyalty_discount: 0,
            loyalty_discount_percentage: 0,
            security_deposit: 0,
            total_amount: 0,
        }
    }

    /// Compute a quote for renting `power_bank_type` for
    /// `duration_hours`, starting at `start_time`, with the user's
    /// loyalty discount percentage applied to the surcharged subtotal.
    pub fn compute(
        power_bank_type: &PowerBankType,
        duration_hours: i32,
        rental_type: &RentalType,
        start_time: DateTime<Utc>,
        loyalty_discount_percentage: i32,
    ) -> Self {
        let base_price = match rental_type {
            RentalType::Hourly => power_bank_type.price_per_hour * duration_hours as i64,
            RentalType::Daily => {
                // Partial days round up
                let days = (duration_hours as i64 + 23) / 24;
                power_bank_type.price_per_day * days
            }
        };

        let peak_surcharge = if is_peak_hour(start_time) {
            base_price * PEAK_SURCHARGE_PERCENT / 100
        } else {
            0
        };
        let weekend_premium = if is_weekend(start_time) {
            base_price * WEEKEND_PREMIUM_PERCENT / 100
        } else {
            0
        };
        let surcharges = peak_surcharge + weekend_premium;

        let subtotal = base_price + surcharges;
        let loyalty_discount = subtotal * loyalty_discount_percentage as i64 / 100;

        let security_deposit = match power_bank_type.category {
            PowerBankCategory::Standard => STANDARD_DEPOSIT,
            PowerBankCategory::Premium => PREMIUM_DEPOSIT,
        };

        Self {
            base_price,
            surcharges,
            peak_surcharge,
            weekend_premium,
            discounts: loyalty_discount,
            loyalty_discount,
            loyalty_discount_percentage,
            security_deposit,
            total_amount: subtotal - loyalty_discount + security_deposit,
        }
    }

    /// Format an amount as a human-readable string
    pub fn format_amount(amount_minor: i64) -> String {
        format!("{}.{:02}", amount_minor / 100, (amount_minor % 100).abs())
    }
}

/// Morning (07:00–09:00) and evening (17:00–20:00) rush windows, UTC
pub fn is_peak_hour(at: DateTime<Utc>) -> bool {
    let hour = at.hour();
    (7..9).contains(&hour) || (17..20).contains(&hour)
}

/// Saturday or Sunday
pub fn is_weekend(at: DateTime<Utc>) -> bool {
    matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_type() -> PowerBankType {
        // 4800.00/day → 200.00/hour
        PowerBankType::from_daily_rate("PowerMax 10K", 10_000, 480_000)
    }

    fn premium_type() -> PowerBankType {
        PowerBankType::from_daily_rate("PowerMax 20K", 20_000, 960_000)
    }

    /// Tuesday 2024-01-02 at 12:00, an off-peak weekday
    fn quiet_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn hourly_base_price() {
        let bd = PricingBreakdown::compute(&sample_type(), 3, &RentalType::Hourly, quiet_noon(), 0);
        assert_eq!(bd.base_price, 60_000);
        assert_eq!(bd.surcharges, 0);
        assert_eq!(bd.total_amount, 60_000 + STANDARD_DEPOSIT);
    }

    #[test]
    fn daily_partial_day_rounds_up() {
        // 30 hours → 2 days
        let bd = PricingBreakdown::compute(&sample_type(), 30, &RentalType::Daily, quiet_noon(), 0);
        assert_eq!(bd.base_price, 960_000);
    }

    #[test]
    fn peak_surcharge_applies_in_rush_window() {
        // Tuesday 08:00 is peak
        let peak = Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap();
        let bd = PricingBreakdown::compute(&sample_type(), 1, &RentalType::Hourly, peak, 0);
        assert_eq!(bd.base_price, 20_000);
        assert_eq!(bd.peak_surcharge, 4_000);
        assert_eq!(bd.weekend_premium, 0);
        assert_eq!(bd.surcharges, 4_000);
    }

    #[test]
    fn weekend_premium_applies_on_saturday() {
        let saturday = Utc.with_ymd_and_hms(2024, 1, 6, 12, 0, 0).unwrap();
        let bd = PricingBreakdown::compute(&sample_type(), 1, &RentalType::Hourly, saturday, 0);
        assert_eq!(bd.weekend_premium, 3_000);
        assert_eq!(bd.peak_surcharge, 0);
    }

    #[test]
    fn peak_and_weekend_stack() {
        // Saturday 18:00 is both weekend and evening peak
        let saturday_evening = Utc.with_ymd_and_hms(2024, 1, 6, 18, 0, 0).unwrap();
        let bd = PricingBreakdown::compute(
            &sample_type(),
            1,
            &RentalType::Hourly,
            saturday_evening,
            0,
        );
        assert_eq!(bd.peak_surcharge, 4_000);
        assert_eq!(bd.weekend_premium, 3_000);
        assert_eq!(bd.surcharges, 7_000);
    }

    #[test]
    fn loyalty_discount_applies_to_surcharged_subtotal() {
        let peak = Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap();
        // subtotal 24_000; 10% gold discount = 2_400
        let bd = PricingBreakdown::compute(&sample_type(), 1, &RentalType::Hourly, peak, 10);
        assert_eq!(bd.loyalty_discount, 2_400);
        assert_eq!(bd.loyalty_discount_percentage, 10);
        assert_eq!(bd.total_amount, 24_000 - 2_400 + STANDARD_DEPOSIT);
    }

    #[test]
    fn premium_category_doubles_deposit() {
        let bd =
            PricingBreakdown::compute(&premium_type(), 1, &RentalType::Hourly, quiet_noon(), 0);
        assert_eq!(bd.security_deposit, PREMIUM_DEPOSIT);
    }

    #[test]
    fn peak_window_boundaries() {
        let just_before = Utc.with_ymd_and_hms(2024, 1, 2, 6, 59, 0).unwrap();
        let window_start = Utc.with_ymd_and_hms(2024, 1, 2, 7, 0, 0).unwrap();
        let window_end = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        assert!(!is_peak_hour(just_before));
        assert!(is_peak_hour(window_start));
        assert!(!is_peak_hour(window_end));
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(
            Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap() // Sunday
        ));
        assert!(!is_weekend(quiet_noon()));
    }

    #[test]
    fn format_amount_minor_units() {
        assert_eq!(PricingBreakdown::format_amount(480_000), "4800.00");
        assert_eq!(PricingBreakdown::format_amount(2_050), "20.50");
        assert_eq!(PricingBreakdown::format_amount(0), "0.00");
    }
}
