use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod plan_queries;
mod venue_queries;
pub mod venue_repository;

/// Re-export all query functions under `queries`
pub mod queries {
    pub use super::plan_queries::*;
    pub use super::venue_queries::*;
}

pub use venue_repository::{PgVenueRepository, VenueRepository};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
