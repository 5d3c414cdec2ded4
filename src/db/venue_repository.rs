use crate::error::Result;
use crate::models::{Place, PriceTier, Restaurant};
use async_trait::async_trait;

/// Read access to the venue catalogue. The planner only ever needs the two
/// "list active" projections; everything else (radius, interests, ranking)
/// happens in memory.
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Active restaurants, optionally limited to one price tier.
    async fn active_restaurants(&self, price_tier: Option<PriceTier>) -> Result<Vec<Restaurant>>;

    /// Active places; a non-empty tag set restricts to overlapping
    /// `suitable_for` tags.
    async fn active_places(&self, suitable_for: &[String]) -> Result<Vec<Place>>;
}

pub struct PgVenueRepository {
    pool: sqlx::PgPool,
}

impl PgVenueRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}

#[async_trait]
impl VenueRepository for PgVenueRepository {
    async fn active_restaurants(&self, price_tier: Option<PriceTier>) -> Result<Vec<Restaurant>> {
        Ok(super::venue_queries::list_active_restaurants(&self.pool, price_tier).await?)
    }

    async fn active_places(&self, suitable_for: &[String]) -> Result<Vec<Place>> {
        Ok(super::venue_queries::list_active_places(&self.pool, suitable_for).await?)
    }
}
