//! Power-bank type (SKU) domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Power bank category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerBankCategory {
    /// 10 000 mAh class, phones and tablets
    Standard,
    /// 20 000 mAh class, includes laptops
    Premium,
}

impl PowerBankCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "premium" => Self::Premium,
            _ => Self::Standard,
        }
    }

    /// Capacity-to-category convention: 20 000 mAh and up is premium.
    pub fn for_capacity(capacity_mah: i32) -> Self {
        if capacity_mah >= 20_000 {
            Self::Premium
        } else {
            Self::Standard
        }
    }

    /// Devices this class of power bank is marketed for.
    pub fn default_target_devices(&self) -> &'static str {
        match self {
            Self::Standard => "phones,tablets",
            Self::Premium => "phones,tablets,laptops",
        }
    }
}

impl std::fmt::Display for PowerBankCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rentable power bank SKU with capacity and pricing
#[derive(Debug, Clone)]
pub struct PowerBankType {
    /// Unique type ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Category derived from capacity by convention
    pub category: PowerBankCategory,
    /// Battery capacity in mAh
    pub capacity_mah: i32,
    /// Hourly rate in minor currency units
    pub price_per_hour: i64,
    /// Daily rate in minor currency units
    pub price_per_day: i64,
    /// Comma-separated device classes this SKU targets
    pub target_devices: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PowerBankType {
    /// Create a SKU from a name, capacity and daily rate.
    ///
    /// The hourly rate is derived as daily/24; category and target
    /// devices follow the capacity convention.
    pub fn from_daily_rate(name: impl Into<String>, capacity_mah: i32, price_per_day: i64) -> Self {
        let category = PowerBankCategory::for_capacity(capacity_mah);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_devices: category.default_target_devices().to_string(),
            category,
            capacity_mah,
            price_per_hour: price_per_day / 24,
            price_per_day,
            created_at: now,
            updated_at: now,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_convention_maps_to_category() {
        assert_eq!(
            PowerBankCategory::for_capacity(10_000),
            PowerBankCategory::Standard
        );
        assert_eq!(
            PowerBankCategory::for_capacity(20_000),
            PowerBankCategory::Premium
        );
        assert_eq!(
            PowerBankCategory::for_capacity(26_800),
            PowerBankCategory::Premium
        );
    }

    #[test]
    fn from_daily_rate_derives_hourly() {
        // 4800.00 per day → 200.00 per hour
        let t = PowerBankType::from_daily_rate("PowerMax 10K", 10_000, 480_000);
        assert_eq!(t.price_per_hour, 20_000);
        assert_eq!(t.category, PowerBankCategory::Standard);
        assert_eq!(t.target_devices, "phones,tablets");
    }

    #[test]
    fn premium_targets_laptops() {
        let t = PowerBankType::from_daily_rate("PowerMax 20K", 20_000, 960_000);
        assert_eq!(t.category, PowerBankCategory::Premium);
        assert!(t.target_devices.contains("laptops"));
    }

    #[test]
    fn category_display_roundtrip() {
        for c in [PowerBankCategory::Standard, PowerBankCategory::Premium] {
            assert_eq!(PowerBankCategory::from_str(c.as_str()), c);
        }
    }
}
