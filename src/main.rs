use axum::Router;
use safar::config::Config;
use safar::db::PgVenueRepository;
use safar::services::planner::TravelPlanner;
use safar::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safar=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Safar API server");
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = safar::db::create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&db_pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize services
    let venue_repo: Arc<dyn safar::db::VenueRepository> =
        Arc::new(PgVenueRepository::new(db_pool.clone()));
    let planner = TravelPlanner::new(venue_repo, config.planner.clone());

    // Create application state
    let state = Arc::new(AppState { db_pool, planner });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", safar::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
