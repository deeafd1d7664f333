//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{
    BookingService, InventoryService, PaymentService, PricingService, RentalOrchestrator,
    ReservationService,
};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::{
    bookings, health, inventory, payments, power_bank_types, pricing, rentals, reservations,
    stations,
};
use crate::interfaces::ws::{create_notification_state, ws_notifications_handler};
use crate::notifications::SharedEventBus;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Stations
        stations::handlers::list_stations,
        stations::handlers::create_station,
        stations::handlers::get_station,
        stations::handlers::update_station,
        stations::handlers::delete_station,
        stations::handlers::get_station_availability,
        // Power bank types
        power_bank_types::handlers::list_power_bank_types,
        power_bank_types::handlers::create_power_bank_type,
        power_bank_types::handlers::get_power_bank_type,
        power_bank_types::handlers::update_power_bank_type,
        power_bank_types::handlers::delete_power_bank_type,
        // Inventory
        inventory::handlers::set_inventory,
        inventory::handlers::sync_inventory,
        // Reservations
        reservations::handlers::create_reservation,
        reservations::handlers::list_reservations,
        reservations::handlers::complete_reservation,
        reservations::handlers::cancel_reservation,
        reservations::handlers::expire_reservations,
        // Bookings
        bookings::handlers::create_booking,
        bookings::handlers::list_bookings,
        bookings::handlers::get_booking_by_order_id,
        bookings::handlers::confirm_payment,
        // Rentals
        rentals::handlers::list_rentals,
        rentals::handlers::start_rental,
        rentals::handlers::get_rental,
        rentals::handlers::confirm_return,
        rentals::handlers::force_return,
        rentals::handlers::extend_rental,
        rentals::handlers::cancel_rental,
        // Pricing
        pricing::handlers::quote,
        // Payments
        payments::handlers::charge_card,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Stations
            stations::StationDto,
            stations::StationWithInventoryDto,
            stations::StationAvailabilityDto,
            stations::InventoryRowDto,
            stations::CreateStationRequest,
            stations::InitialInventoryEntry,
            stations::UpdateStationRequest,
            // Power bank types
            power_bank_types::PowerBankTypeDto,
            power_bank_types::CreatePowerBankTypeRequest,
            power_bank_types::UpdatePowerBankTypeRequest,
            // Inventory
            inventory::SetInventoryRequest,
            inventory::SyncReportDto,
            inventory::SyncAdjustmentDto,
            // Reservations
            reservations::ReservationDto,
            reservations::CreateReservationRequest,
            reservations::ExpireSweepResponse,
            // Bookings
            bookings::BookingDto,
            bookings::CreateBookingRequest,
            bookings::ConfirmPaymentRequest,
            // Rentals
            rentals::RentalDto,
            rentals::StartRentalRequest,
            rentals::ExtendRentalRequest,
            // Pricing
            pricing::QuoteRequest,
            pricing::PricingBreakdownDto,
            // Payments
            payments::CardPaymentRequest,
            payments::TransactionDto,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Stations", description = "Charging station CRUD and availability"),
        (name = "Power Bank Types", description = "Rentable power bank SKU management"),
        (name = "Inventory", description = "Per-station stock counters and reconciliation"),
        (name = "Reservations", description = "Short-lived advisory holds preceding payment"),
        (name = "Bookings", description = "Customer bookings and admin payment confirmation"),
        (name = "Rentals", description = "Rental lifecycle: start, return, extend, cancel"),
        (name = "Pricing", description = "Rental pricing quotes"),
        (name = "Payments", description = "Customer card payments via the gateway"),
        (name = "WebSocket Notifications", description = "Real-time event notifications via WebSocket"),
    ),
    info(
        title = "ChargeGo Rental API",
        version = "1.0.0",
        description = "REST API for the power-bank rental platform",
        license(name = "MIT"),
        contact(name = "ChargeGo", email = "support@chargego.app")
    )
)]
pub struct ApiDoc;

/// Everything the router needs, wired once at startup
pub struct RouterDeps {
    pub repos: Arc<dyn RepositoryProvider>,
    pub db: DatabaseConnection,
    pub event_bus: SharedEventBus,
    pub reservation_service: Arc<ReservationService>,
    pub booking_service: Arc<BookingService>,
    pub orchestrator: Arc<RentalOrchestrator>,
    pub inventory_service: Arc<InventoryService>,
    pub pricing_service: Arc<PricingService>,
    pub payment_service: Arc<PaymentService>,
}

/// Create the API router with all routes
pub fn create_api_router(deps: RouterDeps) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_state = health::HealthState {
        db: deps.db.clone(),
        started_at: Arc::new(Instant::now()),
    };

    // Station routes (inventory row edits share the /stations prefix)
    let station_state = stations::StationAppState {
        repos: deps.repos.clone(),
        inventory_service: deps.inventory_service.clone(),
    };
    let inventory_state = inventory::InventoryAppState {
        inventory_service: deps.inventory_service.clone(),
    };
    let station_routes = Router::new()
        .route(
            "/",
            get(stations::list_stations).post(stations::create_station),
        )
        .route(
            "/{station_id}",
            get(stations::get_station)
                .put(stations::update_station)
                .delete(stations::delete_station),
        )
        .route(
            "/{station_id}/availability",
            get(stations::get_station_availability),
        )
        .with_state(station_state);

    let station_inventory_routes = Router::new()
        .route(
            "/{station_id}/inventory/{type_id}",
            put(inventory::set_inventory),
        )
        .with_state(inventory_state.clone());

    // Inventory reconciliation
    let inventory_routes = Router::new()
        .route("/sync", post(inventory::sync_inventory))
        .with_state(inventory_state);

    // Power bank type routes
    let power_bank_type_routes = Router::new()
        .route(
            "/",
            get(power_bank_types::list_power_bank_types)
                .post(power_bank_types::create_power_bank_type),
        )
        .route(
            "/{type_id}",
            get(power_bank_types::get_power_bank_type)
                .put(power_bank_types::update_power_bank_type)
                .delete(power_bank_types::delete_power_bank_type),
        )
        .with_state(power_bank_types::PowerBankTypeAppState {
            repos: deps.repos.clone(),
        });

    // Reservation routes
    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/expire", post(reservations::expire_reservations))
        .route(
            "/{reservation_id}/complete",
            post(reservations::complete_reservation),
        )
        .route(
            "/{reservation_id}/cancel",
            post(reservations::cancel_reservation),
        )
        .with_state(reservations::ReservationAppState {
            reservation_service: deps.reservation_service,
        });

    // Booking routes
    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/by-order/{order_id}", get(bookings::get_booking_by_order_id))
        .route(
            "/{booking_id}/confirm-payment",
            post(bookings::confirm_payment),
        )
        .with_state(bookings::BookingAppState {
            booking_service: deps.booking_service,
            orchestrator: deps.orchestrator.clone(),
        });

    // Rental routes
    let rental_routes = Router::new()
        .route("/", get(rentals::list_rentals).post(rentals::start_rental))
        .route("/{rental_id}", get(rentals::get_rental))
        .route("/{rental_id}/confirm-return", post(rentals::confirm_return))
        .route("/{rental_id}/force-return", post(rentals::force_return))
        .route("/{rental_id}/extend", post(rentals::extend_rental))
        .route("/{rental_id}/cancel", post(rentals::cancel_rental))
        .with_state(rentals::RentalAppState {
            orchestrator: deps.orchestrator,
        });

    // Pricing routes
    let pricing_routes = Router::new()
        .route("/quote", post(pricing::quote))
        .with_state(pricing::PricingAppState {
            pricing_service: deps.pricing_service,
        });

    // Payment routes
    let payment_routes = Router::new()
        .route("/card", post(payments::charge_card))
        .with_state(payments::PaymentAppState {
            payment_service: deps.payment_service,
        });

    // Notification WebSocket routes (no auth for WebSocket upgrade)
    let notification_state = create_notification_state(deps.event_bus);
    let notification_routes = Router::new()
        .route("/ws", get(ws_notifications_handler))
        .with_state(notification_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Stations (+ per-station inventory edits)
        .nest("/api/v1/stations", station_routes)
        .nest("/api/v1/stations", station_inventory_routes)
        // Inventory reconciliation
        .nest("/api/v1/inventory", inventory_routes)
        // Power bank types
        .nest("/api/v1/power-bank-types", power_bank_type_routes)
        // Reservations
        .nest("/api/v1/reservations", reservation_routes)
        // Bookings
        .nest("/api/v1/bookings", booking_routes)
        // Rentals
        .nest("/api/v1/rentals", rental_routes)
        // Pricing
        .nest("/api/v1/pricing", pricing_routes)
        // Payments
        .nest("/api/v1/payments", payment_routes)
        // Notifications WebSocket
        .nest("/api/v1/notifications", notification_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
