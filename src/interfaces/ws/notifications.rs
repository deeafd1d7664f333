//! WebSocket handler for UI notification clients
//!
//! Provides real-time event streaming to admin and customer UIs.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::select;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::notifications::{EventMessage, SharedEventBus};

/// Query parameters for filtering events
#[derive(Debug, Deserialize)]
pub struct EventFilter {
    /// Only events concerning this user (customer view)
    pub user_id: Option<Uuid>,
    /// Filter by event types (comma-separated, optional)
    pub event_types: Option<String>,
}

impl EventFilter {
    /// Check if event matches the filter
    pub fn matches(&self, event: &EventMessage) -> bool {
        if let Some(user_id) = self.user_id {
            if event.event.user_id() != Some(user_id) {
                return false;
            }
        }

        if let Some(ref types) = self.event_types {
            let allowed_types: Vec<&str> = types.split(',').map(|s| s.trim()).collect();
            if !allowed_types.contains(&event.event.event_type()) {
                return false;
            }
        }

        true
    }
}

/// State for notification WebSocket handler
#[derive(Clone)]
pub struct NotificationState {
    pub event_bus: SharedEventBus,
}

/// Create the notification handler state
pub fn create_notification_state(event_bus: SharedEventBus) -> NotificationState {
    NotificationState { event_bus }
}

/// WebSocket upgrade handler for notifications
pub async fn ws_notifications_handler(
    ws: WebSocketUpgrade,
    State(state): State<NotificationState>,
    Query(filter): Query<EventFilter>,
) -> impl IntoResponse {
    info!(
        "New notification WebSocket connection: user={:?}, event_types={:?}",
        filter.user_id, filter.event_types
    );

    ws.on_upgrade(move |socket| handle_notification_socket(socket, state, filter))
}

/// Handle a WebSocket connection for notifications
async fn handle_notification_socket(
    socket: WebSocket,
    state: NotificationState,
    filter: EventFilter,
) {
    let (mut sender, mut receiver) = socket.split();
    let mut subscriber = state.event_bus.subscribe();

    // Send welcome message
    let welcome = serde_json::json!({
        "type": "connected",
        "message": "Connected to notification stream",
        "filter": {
            "user_id": filter.user_id,
            "event_types": filter.event_types
        }
    });

    if let Err(e) = sender.send(Message::Text(welcome.to_string().into())).await {
        error!("Failed to send welcome message: {}", e);
        return;
    }

    info!("Notification WebSocket client connected");

    loop {
        select! {
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        debug!("Received text message: {}", text);
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if let Err(e) = sender.send(Message::Pong(data)).await {
                            error!("Failed to send pong: {}", e);
                            break;
                        }
                    }
                    Some(Ok(Message::Pong(_))) => {
                        debug!("Received pong");
                    }
                    Some(Ok(Message::Close(_))) => {
                        info!("Client sent close");
                        break;
                    }
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    None => {
                        info!("WebSocket stream ended");
                        break;
                    }
                    _ => {}
                }
            }
            event = subscriber.recv() => {
                match event {
                    Some(message) => {
                        if !filter.matches(&message) {
                            continue;
                        }
                        let payload = match serde_json::to_string(&message) {
                            Ok(json) => json,
                            Err(e) => {
                                error!("Failed to serialize event: {}", e);
                                continue;
                            }
                        };
                        if let Err(e) = sender.send(Message::Text(payload.into())).await {
                            warn!("Failed to send event to client: {}", e);
                            break;
                        }
                    }
                    None => {
                        info!("Event bus closed, ending notification stream");
                        break;
                    }
                }
            }
        }
    }

    info!("Notification WebSocket client disconnected");
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::events::{Event, InventorySyncedEvent, ReturnConfirmedEvent};
    use chrono::Utc;

    fn synced_message() -> EventMessage {
        EventMessage::new(Event::InventorySynced(InventorySyncedEvent {
            rows_checked: 1,
            rows_adjusted: 0,
            timestamp: Utc::now(),
        }))
    }

    fn return_message(user_id: Uuid) -> EventMessage {
        EventMessage::new(Event::ReturnConfirmed(ReturnConfirmedEvent {
            rental_id: Uuid::new_v4(),
            user_id,
            station_name: "Mall Kiosk".into(),
            power_bank_type_name: "PowerMax 10K".into(),
            forced: false,
            timestamp: Utc::now(),
        }))
    }

    #[test]
    fn no_filter_matches_everything() {
        let filter = EventFilter {
            user_id: None,
            event_types: None,
        };
        assert!(filter.matches(&synced_message()));
    }

    #[test]
    fn user_filter_drops_other_users_and_global_events() {
        let user_id = Uuid::new_v4();
        let filter = EventFilter {
            user_id: Some(user_id),
            event_types: None,
        };
        assert!(filter.matches(&return_message(user_id)));
        assert!(!filter.matches(&return_message(Uuid::new_v4())));
        assert!(!filter.matches(&synced_message()));
    }

    #[test]
    fn type_filter_is_comma_separated() {
        let filter = EventFilter {
            user_id: None,
            event_types: Some("inventory_synced, booking_created".into()),
        };
        assert!(filter.matches(&synced_message()));
        assert!(!filter.matches(&return_message(Uuid::new_v4())));
    }
}
