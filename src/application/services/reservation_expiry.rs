//! Background task that periodically expires overdue reservations.
//!
//! Runs in a tokio::spawn loop, checking every `check_interval_secs`
//! (default 30) for active reservations past their `expires_at` and
//! marking them as expired.

use std::sync::Arc;

use tokio::time::Duration;
use tracing::{info, warn};

use crate::application::services::ReservationService;
use crate::shared::shutdown::ShutdownSignal;

/// Start the reservation expiry background task.
///
/// The task checks every `check_interval_secs` for reservations with
/// status "active" and `expires_at < now()`, then updates them to
/// "expired".
pub fn start_reservation_expiry_task(
    service: Arc<ReservationService>,
    shutdown: ShutdownSignal,
    check_interval_secs: u64,
) {
    tokio::spawn(async move {
        info!(
            check_interval = check_interval_secs,
            "📅 Reservation expiry task started"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(check_interval_secs));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match service.expire_overdue().await {
                        Ok(0) => {}
                        Ok(count) => info!(count, "Reservations expired"),
                        Err(e) => warn!(error = %e, "Reservation expiry check error"),
                    }
                }
                _ = shutdown.notified().wait() => {
                    info!("📅 Reservation expiry task shutting down");
                    break;
                }
            }
        }

        info!("📅 Reservation expiry task stopped");
    });
}
