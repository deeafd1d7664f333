//! Real-time notifications
//!
//! In-process pub/sub of typed notification events, fanned out to UI
//! clients over WebSocket. Delivery is best-effort: publishing never
//! fails a business operation.

pub mod event_bus;
pub mod events;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use events::{Event, EventMessage};
