//! User loyalty domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Loyalty tier with its discount percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "silver" => Self::Silver,
            "gold" => Self::Gold,
            "platinum" => Self::Platinum,
            _ => Self::Bronze,
        }
    }

    /// Discount percentage granted by the tier
    pub fn discount_percentage(&self) -> i32 {
        match self {
            Self::Bronze => 0,
            Self::Silver => 5,
            Self::Gold => 10,
            Self::Platinum => 15,
        }
    }
}

impl std::fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-user loyalty standing
#[derive(Debug, Clone)]
pub struct UserLoyalty {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Lifetime confirmed bookings
    pub total_bookings: i32,
    pub tier: LoyaltyTier,
    /// Effective discount percentage (normally the tier default)
    pub discount_percentage: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserLoyalty {
    /// Fresh loyalty record: bronze with no discount.
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            total_bookings: 0,
            tier: LoyaltyTier::Bronze,
            discount_percentage: LoyaltyTier::Bronze.discount_percentage(),
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
    fn new_record_is_bronze_with_zero_discount() {
        let l = UserLoyalty::new(Uuid::new_v4());
        assert_eq!(l.tier, LoyaltyTier::Bronze);
        assert_eq!(l.discount_percentage, 0);
        assert_eq!(l.total_bookings, 0);
    }

    #[test]
    fn tier_discounts_increase() {
        assert_eq!(LoyaltyTier::Bronze.discount_percentage(), 0);
        assert_eq!(LoyaltyTier::Silver.discount_percentage(), 5);
        assert_eq!(LoyaltyTier::Gold.discount_percentage(), 10);
        assert_eq!(LoyaltyTier::Platinum.discount_percentage(), 15);
    }

    #[test]
    fn tier_roundtrip_and_unknown_defaults_to_bronze() {
        for tier in [
            LoyaltyTier::Bronze,
            LoyaltyTier::Silver,
            LoyaltyTier::Gold,
            LoyaltyTier::Platinum,
        ] {
            assert_eq!(LoyaltyTier::from_str(tier.as_str()), tier);
        }
        assert_eq!(LoyaltyTier::from_str("diamond"), LoyaltyTier::Bronze);
    }
}
