//! Notification events
//!
//! Defines all event types that can be broadcasted to WebSocket clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event types for notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// Customer created a booking (admin-facing)
    BookingCreated(BookingCreatedEvent),
    /// Admin confirmed a booking payment; rental is live
    PaymentConfirmed(PaymentConfirmedEvent),
    /// Return confirmed by admin (customer-facing)
    ReturnConfirmed(ReturnConfirmedEvent),
    /// Reservation hold lapsed
    ReservationExpired(ReservationExpiredEvent),
    /// An inventory row dropped below the low-stock threshold
    InventoryLow(InventoryLowEvent),
    /// Reconciliation sweep adjusted inventory rows
    InventorySynced(InventorySyncedEvent),
}

impl Event {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::BookingCreated(_) => "booking_created",
            Event::PaymentConfirmed(_) => "payment_confirmed",
            Event::ReturnConfirmed(_) => "return_confirmed",
            Event::ReservationExpired(_) => "reservation_expired",
            Event::InventoryLow(_) => "inventory_low",
            Event::InventorySynced(_) => "inventory_synced",
        }
    }

    /// Get the customer the event concerns, if any
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Event::BookingCreated(e) => Some(e.user_id),
            Event::PaymentConfirmed(e) => Some(e.user_id),
            Event::ReturnConfirmed(e) => Some(e.user_id),
            Event::ReservationExpired(e) => Some(e.user_id),
            Event::InventoryLow(_) => None,
            Event::InventorySynced(_) => None,
        }
    }
}

/// Customer created a booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreatedEvent {
    pub booking_id: Uuid,
    pub order_id: String,
    pub user_id: Uuid,
    pub station_id: Uuid,
    pub total_amount: i64,
    pub timestamp: DateTime<Utc>,
}

/// Booking payment confirmed, rental created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfirmedEvent {
    pub booking_id: Uuid,
    pub rental_id: Uuid,
    pub user_id: Uuid,
    pub total_amount: i64,
    pub end_time: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

/// Return confirmed (normal or forced)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnConfirmedEvent {
    pub rental_id: Uuid,
    pub user_id: Uuid,
    pub station_name: String,
    pub power_bank_type_name: String,
    /// True when the admin force-returned without customer action
    pub forced: bool,
    pub timestamp: DateTime<Utc>,
}

/// Reservation hold lapsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationExpiredEvent {
    pub reservation_id: Uuid,
    pub user_id: Uuid,
    pub station_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// Inventory row below the low-stock threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLowEvent {
    pub station_id: Uuid,
    pub power_bank_type_id: Uuid,
    pub available_units: i32,
    pub timestamp: DateTime<Utc>,
}

/// Reconciliation sweep finished
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySyncedEvent {
    pub rows_checked: usize,
    pub rows_adjusted: usize,
    pub timestamp: DateTime<Utc>,
}

/// Envelope carrying an event to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    /// Unique message ID
    pub id: Uuid,
    /// When the message was published
    pub published_at: DateTime<Utc>,
    /// The event payload
    #[serde(flatten)]
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: Uuid::new_v4(),
            published_at: Utc::now(),
            event,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names() {
        let e = Event::InventorySynced(InventorySyncedEvent {
            rows_checked: 4,
            rows_adjusted: 1,
            timestamp: Utc::now(),
        });
        assert_eq!(e.event_type(), "inventory_synced");
        assert!(e.user_id().is_none());
    }

    #[test]
    fn customer_events_carry_user_id() {
        let user_id = Uuid::new_v4();
        let e = Event::ReturnConfirmed(ReturnConfirmedEvent {
            rental_id: Uuid::new_v4(),
            user_id,
            station_name: "Mall Kiosk".into(),
            power_bank_type_name: "PowerMax 10K".into(),
            forced: false,
            timestamp: Utc::now(),
        });
        assert_eq!(e.user_id(), Some(user_id));
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let e = Event::ReservationExpired(ReservationExpiredEvent {
            reservation_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            station_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        });
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "ReservationExpired");
        assert!(json["data"]["reservation_id"].is_string());
    }
}
