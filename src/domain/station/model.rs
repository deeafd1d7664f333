//! Station domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Physical charging-kiosk location
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique station ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Geo latitude (optional)
    pub latitude: Option<f64>,
    /// Geo longitude (optional)
    pub longitude: Option<f64>,
    /// Denormalized count of power banks assigned to the station
    pub total_power_banks: i32,
    /// Station-level hourly rate in minor currency units
    pub price_per_hour: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        total_power_banks: i32,
        price_per_hour: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            latitude: None,
            longitude: None,
            total_power_banks,
            price_per_hour,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_station_has_no_location() {
        let s = Station::new("Mall Kiosk", "12 Market Road", 10, 5000);
        assert!(s.latitude.is_none());
        assert!(s.longitude.is_none());
        assert_eq!(s.total_power_banks, 10);
    }

    #[test]
    fn with_location_sets_coordinates() {
        let s = Station::new("Airport", "Terminal 2", 20, 5000).with_location(6.577, 3.321);
        assert_eq!(s.latitude, Some(6.577));
        assert_eq!(s.longitude, Some(3.321));
    }
}
