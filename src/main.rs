//!
//! REST backend for the ChargeGo power-bank rental platform.
//! Reads configuration from TOML file (~/.config/chargego/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use chargego::application::payment::SimulatedOpayGateway;
use chargego::application::services::{
    start_reservation_expiry_task, BookingService, InventoryService, PaymentService,
    PricingService, RentalOrchestrator, ReservationService,
};
use chargego::infrastructure::database::migrator::Migrator;
use chargego::shared::shutdown::ShutdownCoordinator;
use chargego::{
    create_api_router, create_event_bus, default_config_path, init_database, AppConfig,
    DatabaseConfig, RouterDeps, SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CHARGEGO_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting ChargeGo rental backend...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Seed the default power bank SKUs if the catalogue is empty
    seed_default_power_bank_types(&db).await;

    // Initialize repository provider
    let repos: Arc<dyn chargego::domain::RepositoryProvider> =
        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    // Initialize event bus for real-time notifications
    let event_bus = create_event_bus();
    info!("🔔 Event bus initialized for real-time notifications");

    // Initialize services
    let reservation_service = Arc::new(ReservationService::new(repos.clone(), event_bus.clone()));
    let pricing_service = Arc::new(PricingService::new(repos.clone()));
    let booking_service = Arc::new(BookingService::new(repos.clone(), event_bus.clone()));
    let orchestrator = Arc::new(RentalOrchestrator::new(
        repos.clone(),
        pricing_service.clone(),
        event_bus.clone(),
    ));
    let inventory_service = Arc::new(InventoryService::new(repos.clone(), event_bus.clone()));
    let payment_service = Arc::new(PaymentService::new(
        repos.clone(),
        Arc::new(SimulatedOpayGateway),
    ));

    // Initialize shutdown coordinator
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();

    // Start listening for shutdown signals (SIGTERM, SIGINT)
    shutdown.start_signal_listener();

    // Start the reservation expiry sweep
    start_reservation_expiry_task(
        reservation_service.clone(),
        shutdown_signal.clone(),
        app_cfg.sweep.reservation_expiry_interval_secs,
    );

    // Create REST API router
    let api_router = create_api_router(RouterDeps {
        repos,
        db: db.clone(),
        event_bus,
        reservation_service,
        booking_service,
        orchestrator,
        inventory_service,
        pricing_service,
        payment_service,
    });

    // Start REST API server with graceful shutdown
    let api_addr = format!("{}:{}", app_cfg.server.api_host, app_cfg.server.api_port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let api_shutdown = shutdown_signal.clone();
    let api_server = axum::serve(
        listener,
        api_router.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        api_shutdown.wait().await;
        info!("🛑 REST API server received shutdown signal");
    });

    info!("🚀 Server started. Press Ctrl+C to shutdown gracefully.");

    if let Err(e) = api_server.await {
        error!("REST API server error: {}", e);
    }

    // Perform final cleanup
    info!("🧹 Performing final cleanup...");

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("✅ Database connection closed");
    }

    info!("👋 ChargeGo rental backend shutdown complete");
    Ok(())
}

/// Seed the two standard SKUs when the catalogue is empty
async fn seed_default_power_bank_types(db: &sea_orm::DatabaseConnection) {
    use chargego::domain::power_bank::PowerBankType;
    use chargego::infrastructure::database::entities::power_bank_type;
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    let count = power_bank_type::Entity::find().count(db).await.unwrap_or(0);
    if count > 0 {
        return;
    }

    info!("Seeding default power bank types...");

    let defaults = [
        PowerBankType::from_daily_rate("PowerMax 10K", 10_000, 480_000),
        PowerBankType::from_daily_rate("PowerMax 20K", 20_000, 960_000),
    ];

    for t in defaults {
        let model = power_bank_type::ActiveModel {
            id: Set(t.id),
            name: Set(t.name.clone()),
            category: Set(t.category.as_str().to_string()),
            capacity_mah: Set(t.capacity_mah),
            price_per_hour: Set(t.price_per_hour),
            price_per_day: Set(t.price_per_day),
            target_devices: Set(t.target_devices.clone()),
            created_at: Set(t.created_at),
            updated_at: Set(t.updated_at),
        };
        match model.insert(db).await {
            Ok(_) => info!("Seeded power bank type: {}", t.name),
            Err(e) => error!("Failed to seed power bank type {}: {}", t.name, e),
        }
    }
}
